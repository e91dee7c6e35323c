use std::path::Path;

use briefcheck_core::errors::ExtractionError;
use briefcheck_core::traits::ITextExtractor;
use tracing::debug;

use crate::pdf::PdfExtractor;
use crate::plain::PlainTextExtractor;

/// Dispatches on file extension: `.pdf` through lopdf, everything else as
/// UTF-8 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentExtractor {
    pdf: PdfExtractor,
    plain: PlainTextExtractor,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ITextExtractor for DocumentExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        if self.pdf.supports(path) {
            debug!(path = %path.display(), "extracting briefing as PDF");
            self.pdf.extract(path)
        } else {
            self.plain.extract(path)
        }
    }
}
