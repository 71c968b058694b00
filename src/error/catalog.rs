//! Migration catalog errors

use super::EnvError;

/// Creates a catalog read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> EnvError {
    EnvError::CatalogReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate outgoing migration error
pub fn duplicate(
    from: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> EnvError {
    EnvError::DuplicateMigration {
        from: from.into(),
        first: first.into(),
        second: second.into(),
    }
}

/// Creates a non-forward migration error
pub fn non_forward(
    file: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> EnvError {
    EnvError::NonForwardMigration {
        file: file.into(),
        from: from.into(),
        to: to.into(),
    }
}

/// Creates a migration document read failed error
pub fn migration_read_failed(path: impl Into<String>, reason: impl Into<String>) -> EnvError {
    EnvError::MigrationReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
