//! Data models for extracted records, configuration and documents.

pub mod config;
pub mod document;
pub mod record;
