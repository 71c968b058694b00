//! Error types and handling for create-moltbot-env
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`meta`]: Repository metadata errors
//! - [`version`]: Version string errors
//! - [`catalog`]: Migration catalog errors

pub mod catalog;
pub mod meta;
pub mod version;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for create-moltbot-env operations
#[derive(Error, Diagnostic, Debug)]
pub enum EnvError {
    // Metadata errors
    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(moltbot_env::meta::read_failed))]
    MetaReadFailed { path: String, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    #[diagnostic(
        code(moltbot_env::meta::parse_failed),
        help("The metadata file must be JSON with a version string, e.g. {{\"meta\": {{\"version\": \"0.1.0\"}}}}")
    )]
    MetaParseFailed { path: String, reason: String },

    // Version errors
    #[error("Invalid version '{input}': {reason}")]
    #[diagnostic(
        code(moltbot_env::version::invalid),
        help("Versions are dot-separated non-negative integers, e.g. 0.2.0")
    )]
    InvalidVersion { input: String, reason: String },

    // Catalog errors
    #[error("Failed to read migrations directory {path}: {reason}")]
    #[diagnostic(code(moltbot_env::catalog::read_failed))]
    CatalogReadFailed { path: String, reason: String },

    #[error("Multiple migrations start at version {from}: '{first}' and '{second}'")]
    #[diagnostic(
        code(moltbot_env::catalog::duplicate_migration),
        help("Each version may have only one outgoing migration; remove or rename one of the files")
    )]
    DuplicateMigration {
        from: String,
        first: String,
        second: String,
    },

    #[error("Migration '{file}' does not move forward ({from} -> {to})")]
    #[diagnostic(
        code(moltbot_env::catalog::non_forward_migration),
        help("A migration's target version must be greater than its source version")
    )]
    NonForwardMigration {
        file: String,
        from: String,
        to: String,
    },

    #[error("Failed to read migration {path}: {reason}")]
    #[diagnostic(code(moltbot_env::catalog::migration_read_failed))]
    MigrationReadFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(moltbot_env::fs::io_error))]
    IoError { message: String },
}

impl EnvError {
    /// Stable identifier reported in the `error` field of machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            EnvError::MetaReadFailed { .. } | EnvError::MetaParseFailed { .. } => "invalid_meta",
            EnvError::InvalidVersion { .. } => "invalid_version",
            EnvError::CatalogReadFailed { .. } => "catalog_unreadable",
            EnvError::DuplicateMigration { .. } => "duplicate_migration",
            EnvError::NonForwardMigration { .. } => "non_forward_migration",
            EnvError::MigrationReadFailed { .. } => "migration_unreadable",
            EnvError::IoError { .. } => "io_error",
        }
    }
}

impl From<std::io::Error> for EnvError {
    fn from(err: std::io::Error) -> Self {
        EnvError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = version::invalid("1.x", "segment 'x' is not a number");
        assert_eq!(
            err.to_string(),
            "Invalid version '1.x': segment 'x' is not a number"
        );
    }

    #[test]
    fn test_error_code() {
        let err = catalog::duplicate("0.1.0", "0.1.0-to-0.2.0.md", "0.1.0-to-0.3.0.md");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("moltbot_env::catalog::duplicate_migration".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let env_err: EnvError = io_err.into();
        assert!(matches!(env_err, EnvError::IoError { .. }));
        assert_eq!(env_err.kind(), "io_error");
    }

    #[test]
    fn test_meta_errors_share_kind() {
        assert_eq!(meta::read_failed("a", "b").kind(), "invalid_meta");
        assert_eq!(meta::parse_failed("a", "b").kind(), "invalid_meta");
    }

    #[test]
    fn test_catalog_error_kinds() {
        assert_eq!(
            catalog::read_failed("migrations", "denied").kind(),
            "catalog_unreadable"
        );
        assert_eq!(
            catalog::non_forward("0.2.0-to-0.1.0.md", "0.2.0", "0.1.0").kind(),
            "non_forward_migration"
        );
        assert_eq!(
            catalog::migration_read_failed("x.md", "gone").kind(),
            "migration_unreadable"
        );
    }

    test_error_contains!(
        test_meta_parse_failed_names_path,
        meta::parse_failed("/repo/.moltbot-env.json", "expected value at line 1"),
        "/repo/.moltbot-env.json",
        "expected value at line 1"
    );

    test_error_contains!(
        test_duplicate_migration_names_both_files,
        catalog::duplicate("0.1.0", "0.1.0-to-0.2.0.md", "0.1-to-0.2.1.md"),
        "0.1.0-to-0.2.0.md",
        "0.1-to-0.2.1.md"
    );

    test_error_contains!(
        test_non_forward_migration_message,
        catalog::non_forward("0.2.0-to-0.2.0.md", "0.2.0", "0.2.0"),
        "does not move forward",
        "0.2.0 -> 0.2.0"
    );
}
