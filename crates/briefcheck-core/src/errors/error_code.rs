//! Stable error codes for the CLI and JSON output.

/// Every error enum implements this to expose a structured code string.
pub trait BriefcheckErrorCode {
    /// Returns the error code (e.g., `"EMBEDDING_ERROR"`).
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EXTRACTION_ERROR: &str = "EXTRACTION_ERROR";
pub const EMBEDDING_ERROR: &str = "EMBEDDING_ERROR";
pub const SIMILARITY_ERROR: &str = "SIMILARITY_ERROR";
pub const GENERATION_ERROR: &str = "GENERATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPOSITORY_ERROR: &str = "REPOSITORY_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
