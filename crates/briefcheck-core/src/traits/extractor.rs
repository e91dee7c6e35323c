use std::path::Path;

use crate::errors::ExtractionError;

/// Extracts raw text from a document on disk.
pub trait ITextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;

    /// Whether this extractor handles the given path.
    fn supports(&self, _path: &Path) -> bool {
        true
    }
}
