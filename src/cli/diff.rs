use clap::{Args, Parser};
use std::path::PathBuf;

/// Migration store location, shared by commands that read the catalog
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Directory containing <from>-to-<to>.md migration documents
    #[arg(long, value_name = "DIR", env = "MOLTBOT_ENV_MIGRATIONS_DIR")]
    pub migrations_dir: Option<PathBuf>,
}

/// Arguments for the diff command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show migrations for the repository in the current directory:\n    create-moltbot-env diff\n\n\
                  Emit one JSON line for scripts and agents:\n    create-moltbot-env diff --json\n\n\
                  Check another repository:\n    create-moltbot-env diff -w ../my-env\n\n\
                  Resolve up to a specific version:\n    create-moltbot-env diff --target 0.2.0\n\n\
                  Distinguish outcomes by exit code (0 migrate, 1 error, 2 no path, 3 up to date):\n    create-moltbot-env diff --detailed-exit-code")]
pub struct DiffArgs {
    /// Print a single line of JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Version to upgrade to (defaults to this tool's version)
    #[arg(long, value_name = "VERSION", env = "MOLTBOT_ENV_TARGET_VERSION")]
    pub target: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,

    /// Use distinct exit codes: 2 for no migration path, 3 for already up to date
    #[arg(long)]
    pub detailed_exit_code: bool,
}
