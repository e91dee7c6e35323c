//! Error handling for briefcheck.
//! One error enum per subsystem, `thiserror` only, aggregated by `BriefcheckError`.

pub mod briefcheck_error;
pub mod config_error;
pub mod embedding_error;
pub mod error_code;
pub mod extraction_error;
pub mod generation_error;
pub mod report_error;
pub mod repository_error;
pub mod similarity_error;

pub use briefcheck_error::{BriefcheckError, BriefcheckResult};
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::BriefcheckErrorCode;
pub use extraction_error::ExtractionError;
pub use generation_error::GenerationError;
pub use report_error::ReportError;
pub use repository_error::RepositoryError;
pub use similarity_error::SimilarityError;
