//! Test fixtures shared by unit tests.
//!
//! Keeps temp directories out of the working directory and gives tests a
//! one-line way to lay down migration documents and metadata files.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_migration};
//!
//! let temp = create_temp_dir();
//! write_migration(temp.path(), "0.1.0-to-0.2.0.md", "# Upgrade");
//! ```

use std::path::Path;

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a file (typically a migration document) under `dir`, creating `dir` if needed.
///
/// # Panics
///
/// Panics if the directory or file cannot be written.
pub fn write_migration(dir: &Path, name: &str, content: &str) {
    std::fs::create_dir_all(dir).expect("Failed to create directory");
    std::fs::write(dir.join(name), content).expect("Failed to write file");
}

/// Write a metadata document (or any other file) at `dir/name`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, content: &str) {
    write_migration(dir, name, content);
}
