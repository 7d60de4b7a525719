//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BizfileError, Result};

/// Main configuration for the bizfile pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BizfileConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Profile extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Nationality phrases matched in addition to the built-in set.
    /// Each entry is matched literally, with flexible spacing between words.
    pub extra_nationalities: Vec<String>,

    /// Emit the hardcoded shareholder record for the one known entity when
    /// the shareholder pattern finds nothing.
    pub known_entity_fallback: bool,

    /// Minimum number of non-whitespace characters a document must carry
    /// before extraction is attempted.
    pub min_text_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            extra_nationalities: Vec::new(),
            known_entity_fallback: true,
            min_text_length: 1,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Keep the OCR text in document envelopes.
    pub include_text: bool,
}

impl BizfileConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| BizfileError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
