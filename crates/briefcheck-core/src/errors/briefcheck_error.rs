use super::error_code::BriefcheckErrorCode;
use super::{
    ConfigError, EmbeddingError, ExtractionError, GenerationError, ReportError, RepositoryError,
    SimilarityError,
};

/// Top-level error aggregating every subsystem error via `From`.
#[derive(Debug, thiserror::Error)]
pub enum BriefcheckError {
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("similarity error: {0}")]
    Similarity(#[from] SimilarityError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

impl BriefcheckErrorCode for BriefcheckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Extraction(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Similarity(e) => e.error_code(),
            Self::Generation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Repository(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type BriefcheckResult<T> = Result<T, BriefcheckError>;
