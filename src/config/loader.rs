//! Loading of agentlint.yaml

use std::fs;
use std::path::Path;

use super::CollectionConfig;
use crate::error::{Result, config};

/// Config filename looked up at the collection root
pub const CONFIG_FILE: &str = "agentlint.yaml";

/// Load the collection configuration
///
/// An explicit path must exist. Without one, `agentlint.yaml` at the
/// collection root is used if present, otherwise the defaults.
pub fn load(collection_root: &Path, explicit: Option<&Path>) -> Result<CollectionConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(config::not_found(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = collection_root.join(CONFIG_FILE);
            if !path.exists() {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                return Ok(CollectionConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

    let parsed = CollectionConfig::from_yaml(&content).map_err(|e| {
        config::parse_failed(path.display().to_string(), e.to_string())
    })?;
    parsed.validate()?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(parsed)
}
