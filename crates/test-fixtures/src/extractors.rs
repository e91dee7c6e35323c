use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use briefcheck_core::errors::ExtractionError;
use briefcheck_core::traits::ITextExtractor;

/// Serves fixed text per path.
#[derive(Default)]
pub struct StaticExtractor {
    texts: HashMap<PathBuf, String>,
    corrupt: HashSet<PathBuf>,
}

impl StaticExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.texts.insert(path.into(), text.into());
        self
    }

    /// Extraction of this path fails as a corrupt PDF would.
    pub fn corrupt(mut self, path: impl Into<PathBuf>) -> Self {
        self.corrupt.insert(path.into());
        self
    }
}

impl ITextExtractor for StaticExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        if self.corrupt.contains(path) {
            return Err(ExtractionError::Pdf {
                path: path.display().to_string(),
                message: "corrupt xref table".to_string(),
            });
        }
        self.texts
            .get(path)
            .cloned()
            .ok_or_else(|| ExtractionError::NotFound {
                path: path.display().to_string(),
            })
    }
}
