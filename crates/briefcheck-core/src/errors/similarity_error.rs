use super::error_code::{self, BriefcheckErrorCode};

/// Cosine similarity failures. A zero-magnitude vector means an upstream
/// extraction or embedding went wrong, so it is reported rather than scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimilarityError {
    #[error("cannot score empty vectors")]
    Empty,

    #[error("dimension mismatch: left has {left}, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("{side} vector has zero magnitude")]
    ZeroMagnitude { side: &'static str },

    #[error("{side} vector has a non-finite component")]
    NonFinite { side: &'static str },
}

impl BriefcheckErrorCode for SimilarityError {
    fn error_code(&self) -> &'static str {
        error_code::SIMILARITY_ERROR
    }
}
