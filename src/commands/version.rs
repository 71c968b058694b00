//! Version command implementation

use crate::config::tool_version;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("create-moltbot-env {}", tool_version());
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", minimum_rust_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn minimum_rust_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
