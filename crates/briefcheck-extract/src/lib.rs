//! # briefcheck-extract
//!
//! Turns briefing documents into raw text. `DocumentExtractor` picks the
//! PDF or plain-text reader by extension.

pub mod document;
pub mod pdf;
pub mod plain;

pub use document::DocumentExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;
