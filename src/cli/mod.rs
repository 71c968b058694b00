//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - diff: Diff command arguments
//! - migrations: Migrations command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod diff;
pub mod migrations;

pub use completions::CompletionsArgs;
pub use diff::DiffArgs;
pub use migrations::MigrationsArgs;

/// create-moltbot-env - moltbot-env repository tooling
///
/// Resolve the upgrade migrations a moltbot-env repository needs to catch up with this release.
#[derive(Parser, Debug)]
#[command(
    name = "create-moltbot-env",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve upgrade migrations for moltbot-env GitOps repositories",
    long_about = "Reads the version a moltbot-env repository was scaffolded with, finds the chain \
                  of migration documents leading to this release, and prints them for a human \
                  or, with --json, for a script or agent to apply.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  create-moltbot-env diff                 \x1b[90m# Show migrations for this repo\x1b[0m\n   \
                  create-moltbot-env diff --json          \x1b[90m# Same, as one JSON line\x1b[0m\n   \
                  create-moltbot-env migrations           \x1b[90m# List bundled migrations\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Repository directory holding .moltbot-env.json (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "MOLTBOT_ENV_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the migrations needed to upgrade this repository
    Diff(DiffArgs),

    /// List available migration documents
    Migrations(MigrationsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
