//! Repository metadata errors

use super::EnvError;

/// Creates a metadata read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> EnvError {
    EnvError::MetaReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a metadata parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> EnvError {
    EnvError::MetaParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
