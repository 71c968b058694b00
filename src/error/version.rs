//! Version string errors

use super::EnvError;

/// Creates an invalid version error
pub fn invalid(input: impl Into<String>, reason: impl Into<String>) -> EnvError {
    EnvError::InvalidVersion {
        input: input.into(),
        reason: reason.into(),
    }
}
