use std::path::Path;

use briefcheck_core::errors::ExtractionError;
use briefcheck_core::traits::ITextExtractor;

/// Reads a file as UTF-8 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl ITextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
        String::from_utf8(bytes).map_err(|_| ExtractionError::InvalidEncoding {
            path: path.display().to_string(),
        })
    }
}

pub(crate) fn io_error(path: &Path, e: std::io::Error) -> ExtractionError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ExtractionError::NotFound {
            path: path.display().to_string(),
        }
    } else {
        ExtractionError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    }
}
