//! Machine-readable output: exactly one compact JSON line per invocation

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use super::Reporter;
use crate::config::{META_FILE, Settings};
use crate::error::EnvError;
use crate::migration::{MigrationEdge, Outcome, ResolvedMigration};
use crate::version::Version;

#[derive(Serialize)]
struct ErrorLine<'a> {
    error: &'a str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpToDateLine<'a> {
    up_to_date: bool,
    version: &'a Version,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NoMigrationPathLine<'a> {
    up_to_date: bool,
    current_version: &'a Version,
    target_version: &'a Version,
    error: &'a str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MigrationsLine<'a> {
    up_to_date: bool,
    current_version: &'a Version,
    target_version: &'a Version,
    migrations: &'a [ResolvedMigration],
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    from: &'a Version,
    to: &'a Version,
    file: &'a str,
}

/// JSON reporter; never emits color codes or prose
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning its sink
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn outcome(&mut self, outcome: &Outcome, settings: &Settings) -> io::Result<()> {
        match outcome {
            Outcome::NoMeta => self.line(&ErrorLine {
                error: "no_meta",
                message: format!(
                    "{META_FILE} not found in {}",
                    settings.workspace_root.display()
                ),
            }),
            Outcome::UpToDate { version } => self.line(&UpToDateLine {
                up_to_date: true,
                version,
            }),
            Outcome::NoMigrationPath {
                current, target, ..
            } => self.line(&NoMigrationPathLine {
                up_to_date: false,
                current_version: current,
                target_version: target,
                error: "no_migration_path",
                message: format!("No migration path from {current} to {target}"),
            }),
            Outcome::Migrations {
                current,
                target,
                migrations,
            } => self.line(&MigrationsLine {
                up_to_date: false,
                current_version: current,
                target_version: target,
                migrations,
            }),
        }
    }

    fn catalog(&mut self, edges: &[MigrationEdge], _store: &Path) -> io::Result<()> {
        let entries: Vec<CatalogEntry<'_>> = edges
            .iter()
            .map(|edge| CatalogEntry {
                from: &edge.from,
                to: &edge.to,
                file: &edge.file,
            })
            .collect();
        self.line(&entries)
    }

    fn error(&mut self, err: &EnvError) -> io::Result<()> {
        self.line(&ErrorLine {
            error: err.kind(),
            message: err.to_string(),
        })
    }
}
