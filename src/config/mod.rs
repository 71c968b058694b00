//! Configuration for create-moltbot-env
//!
//! This module contains:
//! - [`Settings`] - per-invocation settings resolved from flags, environment and defaults
//! - [`meta`] - the repository metadata document (`.moltbot-env.json`)

pub mod meta;

use std::path::{Path, PathBuf};

use crate::error::{EnvError, Result};
use crate::version::Version;

// Re-export commonly used types
pub use meta::{META_FILE, RepositoryMeta};

/// Directory name of the bundled migration documents
pub const MIGRATIONS_DIR: &str = "migrations";

/// The running tool's own release version
pub fn tool_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Default location of the migration store
///
/// A `migrations/` directory next to the executable wins (installed
/// layout); otherwise the directory shipped with the crate sources.
pub fn default_migrations_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MIGRATIONS_DIR)))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(MIGRATIONS_DIR))
}

/// Settings for a single invocation
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the repository metadata document
    pub workspace_root: PathBuf,
    /// Directory holding the migration documents
    pub migrations_dir: PathBuf,
    /// Version the repository should be upgraded to
    pub target_version: Version,
}

impl Settings {
    /// Resolve settings, falling back to the current directory, the default
    /// migration store and the tool version
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or the
    /// target version is not a valid version string.
    pub fn resolve(
        workspace: Option<PathBuf>,
        migrations_dir: Option<PathBuf>,
        target: Option<&str>,
    ) -> Result<Self> {
        let workspace_root = match workspace {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| EnvError::IoError {
                message: format!("Failed to get current directory: {e}"),
            })?,
        };

        let migrations_dir = migrations_dir.unwrap_or_else(default_migrations_dir);
        let target_version = Version::parse(target.unwrap_or_else(|| tool_version()))?;

        tracing::debug!(
            workspace = %workspace_root.display(),
            migrations = %migrations_dir.display(),
            target = %target_version,
            "resolved settings"
        );

        Ok(Self {
            workspace_root,
            migrations_dir,
            target_version,
        })
    }
}
