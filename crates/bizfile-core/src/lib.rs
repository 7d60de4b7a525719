//! Core library for business profile certificate extraction.
//!
//! This crate provides:
//! - Section segmentation of OCR text (officers, shareholders, capital, abbreviations)
//! - Field matching with a typed "not found" value
//! - Business profile data models serialisable to JSON
//! - A document envelope for callers that track processing status

pub mod error;
pub mod models;
pub mod profile;

pub use error::{BizfileError, ExtractionError, Result};
pub use models::config::BizfileConfig;
pub use models::document::{Document, DocumentStatus};
pub use models::record::{
    CapitalBlock, ExtractionRecord, Field, OfficerRecord, Particulars, PrincipalActivities,
    RegisteredOffice, ShareholderRecord, SENTINEL,
};
pub use profile::{extract_profile, ExtractionResult, ProfileExtractor, ProfileParser, RecordParser};
