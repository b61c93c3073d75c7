//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::collection::Collection;
use crate::config::{self, CollectionConfig};
use crate::error::{LintError, Result};

/// Resolve collection path from optional argument
///
/// If a collection path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_collection_path(collection: Option<PathBuf>) -> Result<PathBuf> {
    match collection {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| LintError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Open the collection and load its configuration
pub fn open_collection(
    collection: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<(Collection, CollectionConfig)> {
    let collection = Collection::open(resolve_collection_path(collection)?)?;
    let config = config::load(collection.root(), config_path)?;
    Ok((collection, config))
}
