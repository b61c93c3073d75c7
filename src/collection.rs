//! Access to the files of an agent collection on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, fs as fs_error, lint};

/// Directory holding agent definitions
pub const AGENTS_DIR: &str = "agents";

/// Directory holding context documents
pub const CONTEXT_DIR: &str = "context";

/// Directory holding usage examples
pub const EXAMPLES_DIR: &str = "examples";

#[allow(clippy::expect_used)]
static MARKDOWN_GLOB: LazyLock<Glob<'static>> =
    LazyLock::new(|| Glob::new("*.md").expect("markdown glob is valid"));

/// A collection root directory
#[derive(Debug, Clone)]
pub struct Collection {
    root: PathBuf,
}

impl Collection {
    /// Open the collection rooted at `root`, which must be a directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(lint::collection_not_found(root.display().to_string()));
        }
        tracing::info!(root = %root.display(), "opened collection");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a collection-relative path
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn agent_path(&self, agent: &str) -> PathBuf {
        self.root.join(AGENTS_DIR).join(format!("{agent}.md"))
    }

    pub fn context_path(&self, file_name: &str) -> PathBuf {
        self.root.join(CONTEXT_DIR).join(file_name)
    }

    /// Read a file as text
    pub fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .map_err(|e| fs_error::read_failed(self.display(path), e.to_string()))
    }

    /// Markdown files directly inside `dir` (not recursive), sorted by name.
    /// A missing directory yields no files.
    pub fn markdown_files(&self, dir: &str) -> Vec<PathBuf> {
        let dir_path = self.root.join(dir);
        if !dir_path.is_dir() {
            return Vec::new();
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&dir_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.file_name().to_str().is_some_and(is_markdown))
            .map(walkdir::DirEntry::into_path)
            .collect();
        files.sort();
        files
    }

    /// Collection-relative display form of `path`
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

/// File name of `path`, or empty when it has none
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name of `path` without its extension
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Hidden files count too: a stray `.draft.md` is still an agent file.
fn is_markdown(file_name: &str) -> bool {
    MARKDOWN_GLOB
        .matched(&CandidatePath::from(file_name))
        .is_some()
}
