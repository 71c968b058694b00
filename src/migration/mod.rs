//! Migration catalog and chain resolution
//!
//! This module handles:
//! - Discovering `<from>-to-<to>.md` migration documents ([`registry`])
//! - Walking the catalog from a repository's version to the tool's version ([`chain`])
//! - Classifying the walk and loading the selected documents ([`resolve`])

pub mod chain;
pub mod registry;
pub mod resolve;

use std::path::PathBuf;

use crate::version::Version;

pub use chain::build_chain;
pub use registry::{discover, validate_catalog};
pub use resolve::{Outcome, ResolvedMigration, resolve};

/// One available upgrade step, discovered from a migration document
#[derive(Debug, Clone)]
pub struct MigrationEdge {
    /// Version the step upgrades from
    pub from: Version,
    /// Version the step upgrades to
    pub to: Version,
    /// Document file name, e.g. `0.1.0-to-0.2.0.md`
    pub file: String,
    /// Full path to the document
    pub path: PathBuf,
}

impl MigrationEdge {
    /// Read the document's instructions verbatim
    ///
    /// The content is opaque; it is never parsed or validated.
    pub fn read_content(&self) -> crate::error::Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            crate::error::catalog::migration_read_failed(
                self.path.display().to_string(),
                e.to_string(),
            )
        })
    }
}
