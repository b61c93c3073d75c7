//! Error types and handling for agentlint
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`lint`]: Collection and check errors

pub mod config;
pub mod fs;
pub mod lint;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for agentlint operations
#[derive(Error, Diagnostic, Debug)]
pub enum LintError {
    // Collection errors
    #[error("Collection directory not found: {path}")]
    #[diagnostic(
        code(agentlint::collection::not_found),
        help("Pass the collection root with --collection or run from inside it")
    )]
    CollectionNotFound { path: String },

    #[error("{failed} of {total} checks failed")]
    #[diagnostic(
        code(agentlint::check::failed),
        help("Run with --show-passed to see every check, or -v for details")
    )]
    ChecksFailed { failed: usize, total: usize },

    #[error("No frontmatter found in {path}")]
    #[diagnostic(
        code(agentlint::frontmatter::missing),
        help("Frontmatter must start on the first line with '---' and end with a '---' line")
    )]
    FrontmatterMissing { path: String },

    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(agentlint::completions::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(agentlint::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(agentlint::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(agentlint::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(agentlint::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(agentlint::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(agentlint::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agentlint::fs::io_error))]
    IoError { message: String },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(agentlint::output::serialize_failed))]
    SerializeFailed { message: String },
}

impl From<std::io::Error> for LintError {
    fn from(err: std::io::Error) -> Self {
        LintError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for LintError {
    fn from(err: serde_yaml::Error) -> Self {
        LintError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LintError {
    fn from(err: serde_json::Error) -> Self {
        LintError::SerializeFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LintError>;
