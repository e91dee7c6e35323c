use super::error_code::{self, BriefcheckErrorCode};

/// Structural errors while assembling an analysis report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("required report field missing: {field}")]
    MissingField { field: String },

    #[error("inconsistent compliance fragment: {reason}")]
    Inconsistent { reason: String },
}

impl BriefcheckErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
