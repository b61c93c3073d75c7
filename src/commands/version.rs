//! Version command implementation

use crate::config::{CONFIG_FILE, CollectionConfig};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    for line in version_lines() {
        println!("{line}");
    }
    Ok(())
}

fn version_lines() -> Vec<String> {
    let defaults = CollectionConfig::default();
    vec![
        format!("agentlint {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Build info:".to_string(),
        format!("  Minimum Rust: {}", env!("CARGO_PKG_RUST_VERSION")),
        format!(
            "  Profile: {}",
            if cfg!(debug_assertions) { "debug" } else { "release" }
        ),
        String::new(),
        "Defaults:".to_string(),
        format!("  Config file: {CONFIG_FILE}"),
        format!(
            "  Collection: {} ({} agents, {} context files)",
            defaults.name,
            defaults.agents.len(),
            defaults.context_files.len()
        ),
    ]
}
