//! Configuration errors

use super::LintError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> LintError {
    LintError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> LintError {
    LintError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> LintError {
    LintError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> LintError {
    LintError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
