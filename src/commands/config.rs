//! Config command implementation

use std::path::PathBuf;

use super::helpers::open_collection;
use crate::error::Result;

/// Print the effective configuration as YAML
pub fn run(collection: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let (_, config) = open_collection(collection, config.as_deref())?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
