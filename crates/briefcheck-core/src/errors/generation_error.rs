use super::error_code::{self, BriefcheckErrorCode};

/// Generative-model call and response errors. These are surfaced to the
/// caller, never replaced with defaults.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request to {model} failed: {reason}")]
    RequestFailed { model: String, reason: String },

    #[error("{model} timed out after {timeout_secs}s")]
    Timeout { model: String, timeout_secs: u64 },

    #[error("{model} returned HTTP {status}: {body}")]
    ApiStatus {
        model: String,
        status: u16,
        body: String,
    },

    #[error("{model} returned an empty response")]
    EmptyResponse { model: String },

    #[error("malformed model response: {reason}")]
    MalformedResponse { reason: String, raw: String },

    #[error("unexpected label {label:?}, expected one of: {allowed}")]
    UnexpectedLabel { label: String, allowed: String },
}

impl BriefcheckErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        error_code::GENERATION_ERROR
    }
}
