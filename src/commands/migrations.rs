//! Migrations command implementation
//!
//! Lists the migration catalog in walk order so release authors can check
//! that every version has exactly one way forward.

use crate::cli::MigrationsArgs;
use crate::commands::ExitStatus;
use crate::config::default_migrations_dir;
use crate::error::Result;
use crate::migration::{discover, validate_catalog};
use crate::ui;

/// Run migrations command
pub fn run(args: MigrationsArgs) -> Result<ExitStatus> {
    let mut reporter = ui::reporter(args.json);
    let store = args
        .store
        .migrations_dir
        .unwrap_or_else(default_migrations_dir);

    let listed = discover(&store).and_then(|edges| {
        validate_catalog(&edges)?;
        reporter.catalog(&edges, &store)?;
        Ok(())
    });

    match listed {
        Ok(()) => Ok(ExitStatus::Success),
        Err(err) if args.json => {
            reporter.error(&err)?;
            Ok(ExitStatus::Failure)
        }
        Err(err) => Err(err),
    }
}
