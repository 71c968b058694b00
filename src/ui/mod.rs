//! Output presentation layer
//!
//! This module handles:
//! - Human-readable, colorized output for terminals ([`HumanReporter`])
//! - One-line JSON output for scripts ([`JsonReporter`])
//!
//! Commands report through the [`Reporter`] trait so the output mode is
//! chosen once, from the `--json` flag, and never leaks into resolution.

mod human;
mod json;

use std::io;
use std::path::Path;

pub use human::HumanReporter;
pub use json::JsonReporter;

use crate::config::Settings;
use crate::error::EnvError;
use crate::migration::{MigrationEdge, Outcome};

/// Reporter trait for command results
///
/// Implementations write to arbitrary sinks so they can be exercised
/// against in-memory buffers.
pub trait Reporter {
    /// Report the terminal outcome of `diff`
    fn outcome(&mut self, outcome: &Outcome, settings: &Settings) -> io::Result<()>;

    /// Report the discovered migration catalog
    fn catalog(&mut self, edges: &[MigrationEdge], store: &Path) -> io::Result<()>;

    /// Report a hard error
    fn error(&mut self, err: &EnvError) -> io::Result<()>;
}

/// Create the reporter for the selected output mode, writing to the process streams
pub fn reporter(json: bool) -> Box<dyn Reporter> {
    if json {
        Box::new(JsonReporter::new(io::stdout()))
    } else {
        Box::new(HumanReporter::new(io::stdout(), io::stderr()))
    }
}
