//! create-moltbot-env - moltbot-env repository tooling
//!
//! Resolves the ordered chain of migration documents that upgrades a
//! moltbot-env GitOps repository from the version recorded in its
//! `.moltbot-env.json` to this release, and prints it for a human or, with
//! `--json`, for a script to apply.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod migration;
#[cfg(test)]
mod test_fixtures;
mod ui;
mod version;

use cli::{Cli, Commands};
use commands::ExitStatus;
use ui::{HumanReporter, Reporter};

/// Initialize stderr logging; `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::run(cli.workspace, args),
        Commands::Migrations(args) => commands::migrations::run(args),
        Commands::Version => commands::version::run().map(|()| ExitStatus::Success),
        Commands::Completions(args) => {
            commands::completions::run(args).map(|()| ExitStatus::Success)
        }
    };

    match result {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            let mut reporter = HumanReporter::new(std::io::stdout(), std::io::stderr());
            if reporter.error(&e).is_err() {
                eprintln!("Error: {e}");
            }
            std::process::exit(ExitStatus::Failure.code());
        }
    }
}
