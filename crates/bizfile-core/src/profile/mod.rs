//! Business profile extraction module.

mod parser;
pub mod rules;

pub use parser::{extract_profile, ExtractionResult, ProfileParser, RecordParser};

use tracing::warn;

use crate::error::ExtractionError;
use crate::models::document::Document;
use crate::models::record::ExtractionRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for business profile extractors.
pub trait ProfileExtractor {
    /// Extract a complete record from OCR text. Never fails: fields that
    /// cannot be located are left unresolved.
    fn extract(&self, text: &str) -> ExtractionRecord;

    /// Run extraction over a document's text and record the outcome on it.
    ///
    /// Documents with no usable text are marked failed and the refusal is
    /// returned.
    fn extract_document(&self, document: &mut Document, min_text_length: usize) -> Result<()> {
        match document.usable_text(min_text_length).map(str::to_owned) {
            Ok(text) => {
                let record = self.extract(&text);
                document.complete(record);
                Ok(())
            }
            Err(e) => {
                warn!("Refusing {}: {}", document.file_name, e);
                document.fail(e.to_string());
                Err(e)
            }
        }
    }
}
