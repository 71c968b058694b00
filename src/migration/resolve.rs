//! Classify a repository against the migration catalog
//!
//! Runs the chain builder and turns its walk into one of the terminal
//! outcomes the CLI reports. Steps happen in a fixed order: metadata,
//! target comparison, catalog, walk, documents. The catalog is only loaded
//! when a walk is needed, and documents are only read once the chain is
//! known to reach the target.

use serde::Serialize;

use super::{MigrationEdge, build_chain};
use crate::config::RepositoryMeta;
use crate::error::Result;
use crate::version::Version;

/// A chain step with its instructions loaded
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedMigration {
    pub from: Version,
    pub to: Version,
    pub content: String,
}

/// Terminal outcome of resolving a repository's upgrade path
#[derive(Debug, Clone)]
pub enum Outcome {
    /// No metadata document in the workspace
    NoMeta,
    /// Repository version is not below the target
    UpToDate { version: Version },
    /// The walk stopped at `reached` before getting to `target`
    NoMigrationPath {
        current: Version,
        target: Version,
        reached: Version,
    },
    /// A complete chain, documents in application order
    Migrations {
        current: Version,
        target: Version,
        migrations: Vec<ResolvedMigration>,
    },
}

/// Resolve the upgrade path for `meta` up to `target`
///
/// `catalog` supplies the sorted migration edges and is called at most once.
///
/// # Errors
///
/// Propagates errors from `catalog`, and returns
/// [`crate::error::EnvError::MigrationReadFailed`] if a document on a
/// complete chain cannot be read.
pub fn resolve<F>(meta: Option<&RepositoryMeta>, target: &Version, catalog: F) -> Result<Outcome>
where
    F: FnOnce() -> Result<Vec<MigrationEdge>>,
{
    let Some(meta) = meta else {
        return Ok(Outcome::NoMeta);
    };
    let current = &meta.version;

    if current >= target {
        tracing::debug!(%current, %target, "repository is up to date");
        return Ok(Outcome::UpToDate {
            version: current.clone(),
        });
    }

    let edges = catalog()?;
    let chain = build_chain(current, target, &edges);
    tracing::debug!(
        walk = %chain.versions().map(Version::as_str).collect::<Vec<_>>().join(" -> "),
        "built migration chain"
    );
    if !chain.reaches(target) {
        tracing::debug!(%current, %target, reached = %chain.end(), "migration path has a gap");
        return Ok(Outcome::NoMigrationPath {
            current: current.clone(),
            target: target.clone(),
            reached: chain.end().clone(),
        });
    }

    let migrations = chain
        .edges()
        .iter()
        .map(|edge| {
            Ok(ResolvedMigration {
                from: edge.from.clone(),
                to: edge.to.clone(),
                content: edge.read_content()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Outcome::Migrations {
        current: current.clone(),
        target: target.clone(),
        migrations,
    })
}
