//! Repository metadata (`.moltbot-env.json`) loading
//!
//! Repositories scaffolded from v0.2.0 on keep their metadata under the
//! `meta` key of `.moltbot-env.json`. Older repositories have a standalone
//! `.moltbot-env-meta.json` whose whole document is the metadata object.
//! The primary file is consulted first; if it exists but has no `meta`
//! key, lookup falls through to the legacy file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, meta};
use crate::version::Version;

/// Primary metadata document
pub const META_FILE: &str = ".moltbot-env.json";

/// Legacy metadata document (v0.1.x)
pub const LEGACY_META_FILE: &str = ".moltbot-env-meta.json";

/// Metadata object as written on disk
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeta {
    version: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    last_upgrade: Option<String>,
}

/// Top-level shape of `.moltbot-env.json`; other keys belong to the repository
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default)]
    meta: Option<RawMeta>,
}

/// Repository state relevant to upgrades
#[derive(Debug, Clone)]
pub struct RepositoryMeta {
    /// Version the repository was scaffolded or last upgraded to
    pub version: Version,
    /// Scaffold date
    pub created_at: Option<String>,
    /// Date of the last upgrade, if any
    pub last_upgrade: Option<String>,
    /// Document the metadata was read from
    pub source: PathBuf,
}

impl RepositoryMeta {
    fn from_raw(raw: RawMeta, source: &Path) -> Result<Self> {
        let version = Version::parse(&raw.version)?;
        Ok(Self {
            version,
            created_at: raw.created_at,
            last_upgrade: raw.last_upgrade,
            source: source.to_path_buf(),
        })
    }

    /// Load metadata from `root`
    ///
    /// Returns `Ok(None)` when neither document provides metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if a present document cannot be read or parsed, or
    /// if its version string is invalid.
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let primary = root.join(META_FILE);
        if primary.is_file() {
            let config: EnvConfig = read_json(&primary)?;
            if let Some(raw) = config.meta {
                tracing::debug!(path = %primary.display(), "loaded repository metadata");
                return Self::from_raw(raw, &primary).map(Some);
            }
            tracing::debug!(path = %primary.display(), "no meta key, trying legacy file");
        }

        let legacy = root.join(LEGACY_META_FILE);
        if legacy.is_file() {
            let raw: RawMeta = read_json(&legacy)?;
            tracing::debug!(path = %legacy.display(), "loaded legacy repository metadata");
            return Self::from_raw(raw, &legacy).map(Some);
        }

        Ok(None)
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| meta::read_failed(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&content)
        .map_err(|e| meta::parse_failed(path.display().to_string(), e.to_string()))
}
