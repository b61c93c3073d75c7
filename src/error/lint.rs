//! Collection and check errors

use super::LintError;

/// Creates a collection not found error
pub fn collection_not_found(path: impl Into<String>) -> LintError {
    LintError::CollectionNotFound { path: path.into() }
}

/// Creates a missing frontmatter error
pub fn frontmatter_missing(path: impl Into<String>) -> LintError {
    LintError::FrontmatterMissing { path: path.into() }
}

/// Creates a checks failed error
pub fn checks_failed(failed: usize, total: usize) -> LintError {
    LintError::ChecksFailed { failed, total }
}
