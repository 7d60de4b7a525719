//! Error types for the bizfile-core library.
//!
//! A field that cannot be located is not an error: it is represented by
//! [`crate::Field::Unresolved`]. The errors below cover construction from
//! configuration and the document layer around the engine.

use thiserror::Error;

/// Main error type for the bizfile library.
#[derive(Error, Debug)]
pub enum BizfileError {
    /// Extraction setup or input error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to profile extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A pattern failed to compile or does not have the expected shape.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The document carries no text to extract from.
    #[error("no extracted text to process")]
    EmptyInput,

    /// The document text is shorter than the configured minimum.
    #[error("extracted text too short ({length} characters, minimum {minimum})")]
    InsufficientText { length: usize, minimum: usize },
}

/// Result type for the bizfile library.
pub type Result<T> = std::result::Result<T, BizfileError>;
