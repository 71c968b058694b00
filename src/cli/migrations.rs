use clap::Parser;

use super::diff::StoreArgs;

/// Arguments for the migrations command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List bundled migrations:\n    create-moltbot-env migrations\n\n\
                  List migrations in another directory as JSON:\n    create-moltbot-env migrations --migrations-dir ./migrations --json")]
pub struct MigrationsArgs {
    /// Print a JSON array instead of human-readable output
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}
