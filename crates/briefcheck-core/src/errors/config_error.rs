//! Configuration errors.

use super::error_code::{self, BriefcheckErrorCode};

/// Errors raised while loading or validating configuration, or while building
/// collaborators from it. Always raised at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("missing required secret: {field}")]
    MissingSecret { field: String },

    #[error("unknown provider for {field}: {value}")]
    UnknownProvider { field: String, value: String },
}

impl BriefcheckErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
