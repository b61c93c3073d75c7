//! Common test utilities for agentlint integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch copy of a fixture collection
#[allow(dead_code)]
pub struct TestCollection {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to collection root
    pub path: PathBuf,
}

impl TestCollection {
    /// Create an empty collection directory
    #[allow(dead_code)]
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Copy a fixture collection from tests/common/fixtures/collections
    pub fn from_fixture(fixture_name: &str) -> Self {
        let collection = Self::empty();
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("collections")
            .join(fixture_name);

        copy_dir_recursive(&fixture_path, &collection.path)
            .expect("Failed to copy fixture collection");
        collection
    }

    /// Write a file in the collection
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the collection
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Remove a file from the collection
    #[allow(dead_code)]
    pub fn remove_file(&self, path: &str) {
        fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }
}

/// Copy a directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}
