//! Diff command implementation
//!
//! Resolves the chain of migration documents that upgrades the repository
//! in the workspace to the target version and prints it. Nothing in the
//! repository is modified; applying the migrations is left to the reader.

use std::path::PathBuf;

use crate::cli::DiffArgs;
use crate::commands::ExitStatus;
use crate::config::{RepositoryMeta, Settings};
use crate::error::Result;
use crate::migration::{Outcome, discover, resolve, validate_catalog};
use crate::ui::{self, Reporter};

/// Run diff command
pub fn run(workspace: Option<PathBuf>, args: DiffArgs) -> Result<ExitStatus> {
    let mut reporter = ui::reporter(args.json);

    let status = match diff(workspace, &args, reporter.as_mut()) {
        Ok(status) => status,
        // Machine mode reports hard errors on stdout as structured data
        Err(err) if args.json => {
            reporter.error(&err)?;
            ExitStatus::Failure
        }
        Err(err) => return Err(err),
    };

    Ok(status.collapse(args.detailed_exit_code))
}

fn diff(
    workspace: Option<PathBuf>,
    args: &DiffArgs,
    reporter: &mut dyn Reporter,
) -> Result<ExitStatus> {
    let settings = Settings::resolve(
        workspace,
        args.store.migrations_dir.clone(),
        args.target.as_deref(),
    )?;

    let meta = RepositoryMeta::load(&settings.workspace_root)?;
    if let Some(meta) = &meta {
        tracing::debug!(
            source = %meta.source.display(),
            version = %meta.version,
            created_at = meta.created_at.as_deref().unwrap_or("unknown"),
            last_upgrade = meta.last_upgrade.as_deref().unwrap_or("never"),
            "repository metadata"
        );
    }
    let outcome = resolve(meta.as_ref(), &settings.target_version, || {
        let edges = discover(&settings.migrations_dir)?;
        validate_catalog(&edges)?;
        Ok(edges)
    })?;

    reporter.outcome(&outcome, &settings)?;
    Ok(exit_status(&outcome))
}

fn exit_status(outcome: &Outcome) -> ExitStatus {
    match outcome {
        Outcome::Migrations { .. } => ExitStatus::Success,
        Outcome::NoMeta => ExitStatus::Failure,
        Outcome::NoMigrationPath { .. } => ExitStatus::NoMigrationPath,
        Outcome::UpToDate { .. } => ExitStatus::UpToDate,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::diff::StoreArgs;
    use crate::config::META_FILE;
    use crate::test_fixtures::{create_temp_dir, write_file, write_migration};

    fn args(store: PathBuf, target: &str) -> DiffArgs {
        DiffArgs {
            json: true,
            target: Some(target.to_string()),
            store: StoreArgs {
                migrations_dir: Some(store),
            },
            detailed_exit_code: true,
        }
    }

    #[test]
    fn test_exit_status_per_outcome() {
        let temp = create_temp_dir();
        let repo = temp.path().join("repo");
        let store = temp.path().join("migrations");
        write_migration(&store, "0.1.0-to-0.2.0.md", "one");
        write_migration(&store, "0.2.0-to-0.3.0.md", "two");

        // No metadata
        std::fs::create_dir_all(&repo).unwrap();
        let status = run(Some(repo.clone()), args(store.clone(), "0.3.0")).unwrap();
        assert_eq!(status, ExitStatus::Failure);

        write_file(&repo, META_FILE, r#"{"meta": {"version": "0.1.0"}}"#);
        let status = run(Some(repo.clone()), args(store.clone(), "0.3.0")).unwrap();
        assert_eq!(status, ExitStatus::Success);

        let status = run(Some(repo.clone()), args(store.clone(), "0.4.0")).unwrap();
        assert_eq!(status, ExitStatus::NoMigrationPath);

        let status = run(Some(repo.clone()), args(store, "0.1")).unwrap();
        assert_eq!(status, ExitStatus::UpToDate);
    }

    #[test]
    fn test_json_mode_reports_errors_as_failure() {
        let temp = create_temp_dir();
        write_file(temp.path(), META_FILE, "{ broken");

        let status = run(
            Some(temp.path().to_path_buf()),
            args(temp.path().join("migrations"), "0.3.0"),
        )
        .unwrap();
        assert_eq!(status, ExitStatus::Failure);
    }

    #[test]
    fn test_human_mode_propagates_errors() {
        let temp = create_temp_dir();
        write_file(temp.path(), META_FILE, "{ broken");

        let mut human = args(temp.path().join("migrations"), "0.3.0");
        human.json = false;
        assert!(run(Some(temp.path().to_path_buf()), human).is_err());
    }

    #[test]
    fn test_invalid_catalog_fails_only_when_walked() {
        let temp = create_temp_dir();
        let store = temp.path().join("migrations");
        write_migration(&store, "0.1.0-to-0.2.0.md", "a");
        write_migration(&store, "0.1-to-0.3.0.md", "b");
        write_file(temp.path(), META_FILE, r#"{"meta": {"version": "0.3.0"}}"#);

        let status = run(Some(temp.path().to_path_buf()), args(store.clone(), "0.3.0")).unwrap();
        assert_eq!(status, ExitStatus::UpToDate);

        write_file(temp.path(), META_FILE, r#"{"meta": {"version": "0.1.0"}}"#);
        let mut human = args(store, "0.3.0");
        human.json = false;
        let err = run(Some(temp.path().to_path_buf()), human).unwrap_err();
        assert_eq!(err.kind(), "duplicate_migration");
    }
}
