//! Document envelope passed between the OCR step, the engine and storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::models::record::ExtractionRecord;

/// Processing state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Received, no text yet.
    #[default]
    Uploaded,
    /// Text attached, extraction pending.
    Processing,
    /// Extraction finished.
    Done,
    /// Extraction was refused or failed.
    Failed,
}

/// A certificate together with its OCR text and extraction outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Original file name.
    pub file_name: String,

    /// Current processing state.
    pub status: DocumentStatus,

    /// OCR text, newline-joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,

    /// Extracted record, once done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<ExtractionRecord>,

    /// Reason for a failed status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,

    /// When the document entered the pipeline.
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Create a freshly uploaded document.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            status: DocumentStatus::Uploaded,
            extracted_text: None,
            entities: None,
            failure: None,
            uploaded_at: Utc::now(),
        }
    }

    /// Attach OCR text and move to processing.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.extracted_text = Some(text.into());
        self.status = DocumentStatus::Processing;
        self
    }

    /// The OCR text, provided it is long enough to extract from.
    pub fn usable_text(&self, min_text_length: usize) -> Result<&str, ExtractionError> {
        let text = self
            .extracted_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ExtractionError::EmptyInput)?;

        let length = text.chars().filter(|c| !c.is_whitespace()).count();
        if length < min_text_length {
            return Err(ExtractionError::InsufficientText {
                length,
                minimum: min_text_length,
            });
        }

        Ok(text)
    }

    /// Record a finished extraction.
    pub fn complete(&mut self, record: ExtractionRecord) {
        self.entities = Some(record);
        self.failure = None;
        self.status = DocumentStatus::Done;
    }

    /// Record a refused or failed extraction.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.entities = None;
        self.failure = Some(reason.into());
        self.status = DocumentStatus::Failed;
    }

    pub fn is_done(&self) -> bool {
        self.status == DocumentStatus::Done
    }
}
