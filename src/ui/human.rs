//! Colorized terminal output

use std::io::{self, Write};
use std::path::Path;

use console::Style;
use miette::Diagnostic;

use super::Reporter;
use crate::config::{META_FILE, Settings};
use crate::error::EnvError;
use crate::migration::{MigrationEdge, Outcome, ResolvedMigration};
use crate::version::Version;

const ARROW: &str = " → ";

/// Human-readable reporter; diagnostics for missing metadata and errors go to `err`
pub struct HumanReporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> HumanReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Consume the reporter, returning its sinks
    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn versions_header(&mut self, current: &Version, target: &Version) -> io::Result<()> {
        let cyan = Style::new().cyan();
        writeln!(self.out, "Detected repo version: {}", cyan.apply_to(current))?;
        writeln!(self.out, "Latest CLI version:    {}", cyan.apply_to(target))
    }

    fn migrations(
        &mut self,
        current: &Version,
        target: &Version,
        migrations: &[ResolvedMigration],
    ) -> io::Result<()> {
        let chain = std::iter::once(current.as_str())
            .chain(migrations.iter().map(|m| m.to.as_str()))
            .collect::<Vec<_>>()
            .join(ARROW);

        self.versions_header(current, target)?;
        writeln!(
            self.out,
            "Migrations to apply:   {}",
            Style::new().cyan().apply_to(chain)
        )?;
        writeln!(self.out)?;

        for migration in migrations {
            writeln!(
                self.out,
                "## Migration {}{ARROW}{}",
                migration.from, migration.to
            )?;
            writeln!(self.out)?;
            writeln!(self.out, "{}", migration.content)?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<O: Write, E: Write> Reporter for HumanReporter<O, E> {
    fn outcome(&mut self, outcome: &Outcome, settings: &Settings) -> io::Result<()> {
        match outcome {
            Outcome::NoMeta => {
                writeln!(
                    self.err,
                    "{}",
                    Style::new().red().for_stderr().apply_to(format!(
                        "Error: {META_FILE} not found in {}.",
                        settings.workspace_root.display()
                    ))
                )?;
                writeln!(
                    self.err,
                    "{}",
                    Style::new()
                        .dim()
                        .for_stderr()
                        .apply_to("Are you running this from a moltbot-env repo?")
                )
            }
            Outcome::UpToDate { version } => writeln!(
                self.out,
                "{}",
                Style::new()
                    .green()
                    .apply_to(format!("Already up to date (v{version})"))
            ),
            Outcome::NoMigrationPath {
                current,
                target,
                reached,
            } => {
                self.versions_header(current, target)?;
                writeln!(self.out)?;
                let mut message = format!("No migration files found for {current}{ARROW}{target}");
                if reached != current {
                    message.push_str(&format!(" (migrations stop at {reached})"));
                }
                writeln!(self.out, "{}", Style::new().yellow().apply_to(message))
            }
            Outcome::Migrations {
                current,
                target,
                migrations,
            } => self.migrations(current, target, migrations),
        }
    }

    fn catalog(&mut self, edges: &[MigrationEdge], store: &Path) -> io::Result<()> {
        if edges.is_empty() {
            return writeln!(self.out, "No migrations found in {}.", store.display());
        }

        writeln!(self.out, "Available migrations ({}):", edges.len())?;
        writeln!(self.out)?;
        let width = edges
            .iter()
            .map(|e| e.from.as_str().len() + ARROW.chars().count() + e.to.as_str().len())
            .max()
            .unwrap_or(0);
        for edge in edges {
            let step = format!("{}{ARROW}{}", edge.from, edge.to);
            let padding = width.saturating_sub(step.chars().count());
            writeln!(
                self.out,
                "  {}{}  {}",
                Style::new().bold().yellow().apply_to(&step),
                " ".repeat(padding),
                Style::new().dim().apply_to(&edge.file)
            )?;
        }
        Ok(())
    }

    fn error(&mut self, err: &EnvError) -> io::Result<()> {
        writeln!(
            self.err,
            "{} {err}",
            Style::new().red().bold().for_stderr().apply_to("Error:")
        )?;
        if let Some(help) = err.help() {
            writeln!(
                self.err,
                "{}",
                Style::new()
                    .dim()
                    .for_stderr()
                    .apply_to(format!("  help: {help}"))
            )?;
        }
        Ok(())
    }
}
