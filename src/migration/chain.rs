//! Greedy migration chain builder
//!
//! Migrations model a linear upgrade history: each version has at most one
//! canonical next migration. The builder therefore walks forward one edge
//! at a time instead of searching a graph:
//!
//! 1. If `start >= target` the chain is empty (already up to date).
//! 2. From the cursor (initially `start`), take the first edge in catalog
//!    order whose `from` equals the cursor.
//! 3. No such edge: stop. The chain so far is returned as a partial walk.
//! 4. Otherwise append it, move the cursor to its `to`, and repeat while
//!    the cursor is below `target`.
//!
//! The builder never reports failure itself. A caller detects a gap with
//! [`Chain::reaches`].
//!
//! ```text
//! edges:  0.1.0 -> 0.2.0, 0.2.0 -> 0.3.0, 0.3.0 -> 0.4.0
//! start:  0.1.0   target: 0.3.0
//! chain:  [0.1.0 -> 0.2.0, 0.2.0 -> 0.3.0]
//! ```

use super::MigrationEdge;
use crate::version::Version;

/// An ordered, contiguous walk of migration edges starting at `start`
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    start: Version,
    edges: Vec<&'a MigrationEdge>,
}

impl<'a> Chain<'a> {
    /// Edges in application order
    pub fn edges(&self) -> &[&'a MigrationEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Version reached after applying every edge (the start for an empty chain)
    pub fn end(&self) -> &Version {
        self.edges.last().map_or(&self.start, |edge| &edge.to)
    }

    /// Whether the walk is non-empty and ends at or beyond `target`
    pub fn reaches(&self, target: &Version) -> bool {
        !self.is_empty() && self.end() >= target
    }

    /// Every version visited, start first
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        std::iter::once(&self.start).chain(self.edges.iter().map(|edge| &edge.to))
    }
}

/// Walk `edges` from `start` toward `target`
///
/// `edges` is expected in catalog order (sorted by `from`); when several
/// edges share a `from` version the earliest one is taken.
pub fn build_chain<'a>(start: &Version, target: &Version, edges: &'a [MigrationEdge]) -> Chain<'a> {
    let mut chain = Chain {
        start: start.clone(),
        edges: Vec::new(),
    };

    if start >= target {
        return chain;
    }

    let mut cursor = start;
    while cursor < target {
        let Some(next) = edges.iter().find(|edge| edge.from == *cursor) else {
            tracing::debug!(%cursor, %target, "no migration starts at cursor");
            break;
        };

        // Taking a step past the catalog size would revisit an edge
        if chain.edges.len() == edges.len() {
            tracing::warn!(%cursor, "migration walk revisits an edge, stopping");
            break;
        }

        tracing::debug!(from = %next.from, to = %next.to, file = %next.file, "chain step");
        chain.edges.push(next);
        cursor = &next.to;
    }

    chain
}
