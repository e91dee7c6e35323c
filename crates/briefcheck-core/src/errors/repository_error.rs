use super::error_code::{self, BriefcheckErrorCode};

/// Repository acquisition, walking, and statistics errors.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository path not found: {path}")]
    NotFound { path: String },

    #[error("invalid repository URL: {url}")]
    InvalidUrl { url: String },

    #[error("clone of {url} failed: {message}")]
    CloneFailed { url: String, message: String },

    #[error("git error in {path}: {message}")]
    Git { path: String, message: String },

    #[error("failed to walk {path}: {message}")]
    Walk { path: String, message: String },
}

impl BriefcheckErrorCode for RepositoryError {
    fn error_code(&self) -> &'static str {
        error_code::REPOSITORY_ERROR
    }
}
