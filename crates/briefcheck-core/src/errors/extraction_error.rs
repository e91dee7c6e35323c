use super::error_code::{self, BriefcheckErrorCode};

/// Document text extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("document not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("unsupported document format for {path}: {extension}")]
    UnsupportedFormat { path: String, extension: String },

    #[error("failed to parse PDF {path}: {message}")]
    Pdf { path: String, message: String },

    #[error("{path} is not valid UTF-8 text")]
    InvalidEncoding { path: String },
}

impl BriefcheckErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        error_code::EXTRACTION_ERROR
    }
}
