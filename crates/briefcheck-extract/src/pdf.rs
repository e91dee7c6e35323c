//! PDF text extraction using lopdf.

use std::path::Path;

use briefcheck_core::errors::ExtractionError;
use briefcheck_core::traits::ITextExtractor;
use lopdf::Document;
use tracing::{debug, warn};

/// Extracts the text layer of a PDF, pages in order, joined by blank lines.
///
/// Pages whose text cannot be decoded are skipped with a warning; a document
/// that cannot be loaded at all is an error. Scanned PDFs yield `""`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    fn load(path: &Path) -> Result<Document, ExtractionError> {
        if !path.exists() {
            return Err(ExtractionError::NotFound {
                path: path.display().to_string(),
            });
        }
        Document::load(path).map_err(|e| ExtractionError::Pdf {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl ITextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let doc = Self::load(path)?;

        // get_pages is keyed by 1-based page number in a BTreeMap, so already ordered.
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut page_texts = Vec::with_capacity(pages.len());
        for page in &pages {
            match doc.extract_text(&[*page]) {
                Ok(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        page_texts.push(trimmed.to_string());
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), page, error = %e, "skipping undecodable PDF page");
                }
            }
        }

        debug!(path = %path.display(), pages = pages.len(), with_text = page_texts.len(), "pdf extracted");
        Ok(page_texts.join("\n\n"))
    }

    fn supports(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
    }
}
