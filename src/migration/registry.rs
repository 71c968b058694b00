//! Migration document discovery
//!
//! Migration documents live flat in a single directory and are named
//! `<from>-to-<to>.md`. Anything else in that directory is ignored, as is
//! any name whose versions fail to parse.
//!
//! Discovery is permissive; integrity rules (one outgoing migration per
//! version, every migration moves forward) are checked separately by
//! [`validate_catalog`] so callers can still inspect a broken catalog.

use std::path::Path;

use walkdir::WalkDir;

use super::MigrationEdge;
use crate::error::{Result, catalog};
use crate::version::{Version, compare};

/// File extension of migration documents
pub const MIGRATION_EXTENSION: &str = ".md";

/// Separator between the two versions in a document name
const VERSION_SEPARATOR: &str = "-to-";

/// Parse a document name into its `(from, to)` version pair
///
/// The split happens at the last `-to-`, so `a-to-b-to-c.md` yields
/// `("a-to-b", "c")`, which then fails version parsing.
pub fn parse_file_name(name: &str) -> Option<(Version, Version)> {
    let stem = name.strip_suffix(MIGRATION_EXTENSION)?;
    let (from, to) = stem.rsplit_once(VERSION_SEPARATOR)?;
    if from.is_empty() || to.is_empty() {
        return None;
    }
    let from = Version::parse(from).ok()?;
    let to = Version::parse(to).ok()?;
    Some((from, to))
}

/// Discover all migration documents in `store`, sorted by `from` version
///
/// Edges sharing a `from` version keep file-name order. A missing store
/// yields an empty catalog.
///
/// # Errors
///
/// Returns [`crate::error::EnvError::CatalogReadFailed`] if the store exists
/// but cannot be listed.
pub fn discover(store: &Path) -> Result<Vec<MigrationEdge>> {
    if !store.is_dir() {
        tracing::debug!(store = %store.display(), "migrations directory not found");
        return Ok(Vec::new());
    }

    let mut edges = Vec::new();
    for entry in WalkDir::new(store)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Only failing to list the store itself is fatal
            Err(e) if e.depth() == 0 => {
                return Err(catalog::read_failed(
                    store.display().to_string(),
                    e.to_string(),
                ));
            }
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable store entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file = entry.file_name().to_string_lossy().into_owned();
        let Some((from, to)) = parse_file_name(&file) else {
            tracing::trace!(%file, "skipping file without a migration name");
            continue;
        };

        tracing::trace!(%file, %from, %to, "discovered migration");
        edges.push(MigrationEdge {
            from,
            to,
            file,
            path: entry.into_path(),
        });
    }

    // Stable sort: ties keep file-name order
    edges.sort_by(|a, b| compare(&a.from, &b.from));

    tracing::debug!(
        store = %store.display(),
        count = edges.len(),
        "discovered migrations"
    );
    Ok(edges)
}

/// Check that a sorted catalog describes a linear upgrade history
///
/// # Errors
///
/// - [`crate::error::EnvError::NonForwardMigration`] if a migration's `to`
///   is not greater than its `from`
/// - [`crate::error::EnvError::DuplicateMigration`] if two migrations start
///   at the same version
pub fn validate_catalog(edges: &[MigrationEdge]) -> Result<()> {
    if let Some(edge) = edges.iter().find(|edge| edge.to <= edge.from) {
        return Err(catalog::non_forward(
            &edge.file,
            edge.from.as_str(),
            edge.to.as_str(),
        ));
    }

    // Sorted by `from`, so duplicates are adjacent
    if let Some(pair) = edges.windows(2).find(|pair| pair[0].from == pair[1].from) {
        return Err(catalog::duplicate(
            pair[0].from.as_str(),
            &pair[0].file,
            &pair[1].file,
        ));
    }

    Ok(())
}
