//! Common test utilities for create-moltbot-env integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch repository plus its own migration store
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the repository root (where .moltbot-env.json lives)
    pub path: PathBuf,
    /// Path to the migration store
    pub migrations: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace with an empty repository and no store
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("repo");
        let migrations = temp.path().join("migrations");
        std::fs::create_dir_all(&path).expect("Failed to create repo directory");
        Self {
            temp,
            path,
            migrations,
        }
    }

    /// Write a file in the repository
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write `.moltbot-env.json` with the given metadata version
    #[allow(dead_code)]
    pub fn write_meta(&self, version: &str) {
        self.write_file(
            ".moltbot-env.json",
            &format!(
                r#"{{
  "envs": ["staging"],
  "meta": {{ "version": "{version}", "createdAt": "2025-01-10", "lastUpgrade": null }}
}}"#
            ),
        );
    }

    /// Write the pre-0.2.0 `.moltbot-env-meta.json`
    #[allow(dead_code)]
    pub fn write_legacy_meta(&self, version: &str) {
        self.write_file(
            ".moltbot-env-meta.json",
            &format!(r#"{{ "version": "{version}", "createdAt": "2024-11-02" }}"#),
        );
    }

    /// Write a document into the migration store
    #[allow(dead_code)]
    pub fn write_migration(&self, name: &str, content: &str) {
        std::fs::create_dir_all(&self.migrations).expect("Failed to create migrations directory");
        std::fs::write(self.migrations.join(name), content).expect("Failed to write migration");
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real binary with settings from the environment cleared
#[allow(deprecated)]
pub fn moltbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("create-moltbot-env").expect("binary should be built");
    cmd.env_remove("MOLTBOT_ENV_WORKSPACE")
        .env_remove("MOLTBOT_ENV_MIGRATIONS_DIR")
        .env_remove("MOLTBOT_ENV_TARGET_VERSION")
        .env_remove("RUST_LOG");
    cmd
}

/// Command running inside the workspace repository against its own store
#[allow(dead_code)]
pub fn moltbot_cmd_for_workspace(workspace: &TestWorkspace) -> Command {
    let mut cmd = moltbot_cmd();
    cmd.current_dir(&workspace.path)
        .env("MOLTBOT_ENV_MIGRATIONS_DIR", &workspace.migrations);
    cmd
}
