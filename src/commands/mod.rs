//! Command implementations for create-moltbot-env CLI

pub mod completions;
pub mod diff;
pub mod migrations;
pub mod version;

/// How a command finished, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Migrations resolved and printed (or any other command succeeded)
    Success,
    /// Missing metadata or a hard error
    Failure,
    /// The walk could not reach the target version
    NoMigrationPath,
    /// The repository is already at or beyond the target version
    UpToDate,
}

impl ExitStatus {
    /// Fold every non-success status into [`ExitStatus::Failure`] unless
    /// detailed exit codes were requested
    #[must_use]
    pub fn collapse(self, detailed: bool) -> Self {
        match self {
            ExitStatus::Success => ExitStatus::Success,
            _ if !detailed => ExitStatus::Failure,
            other => other,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::NoMigrationPath => 2,
            ExitStatus::UpToDate => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exit_codes_conflate_non_success() {
        assert_eq!(ExitStatus::Success.collapse(false).code(), 0);
        assert_eq!(ExitStatus::Failure.collapse(false).code(), 1);
        assert_eq!(ExitStatus::NoMigrationPath.collapse(false).code(), 1);
        assert_eq!(ExitStatus::UpToDate.collapse(false).code(), 1);
    }

    #[test]
    fn test_detailed_exit_codes() {
        assert_eq!(ExitStatus::Success.collapse(true).code(), 0);
        assert_eq!(ExitStatus::Failure.collapse(true).code(), 1);
        assert_eq!(ExitStatus::NoMigrationPath.collapse(true).code(), 2);
        assert_eq!(ExitStatus::UpToDate.collapse(true).code(), 3);
    }
}
