use super::error_code::{self, BriefcheckErrorCode};

/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed on {provider}: {reason}")]
    InferenceFailed { provider: String, reason: String },

    #[error("{provider} timed out after {timeout_secs}s")]
    Timeout { provider: String, timeout_secs: u64 },

    #[error("{provider} returned no embedding")]
    EmptyResponse { provider: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}

impl BriefcheckErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        error_code::EMBEDDING_ERROR
    }
}
