//! Officers / authorised representatives.
//!
//! Person blocks are located by their identity-number anchor: an upper-case
//! name line directly followed by an `S1234567D`-shaped ID line. Each block
//! runs to the start of the next one.

use crate::error::ExtractionError;
use crate::models::record::{Field, OfficerRecord};

use super::SectionExtractor;
use super::field::FieldPattern;
use super::patterns::{
    nationality_pattern, ADDRESS_SOURCE, APPOINTMENT_DATE, LINE_BREAK, NATIONALITY,
    OFFICERS_SECTION, OFFICER_ADDRESS, OFFICER_BLOCK_START, OFFICER_ID, OFFICER_NAME, POSITION,
    ROLE_WORDS, SPACE_RUN, STRAY_PREFIX_LINE, STRAY_PREFIX_NUMBER,
};

/// Officers section extractor.
#[derive(Debug, Clone)]
pub struct OfficersExtractor {
    nationality: FieldPattern,
}

impl OfficersExtractor {
    pub fn new() -> Self {
        Self {
            nationality: NATIONALITY.clone(),
        }
    }

    /// Recognise `extra` nationality phrases on top of the built-in set.
    pub fn with_extra_nationalities<S: AsRef<str>>(
        mut self,
        extra: &[S],
    ) -> Result<Self, ExtractionError> {
        if !extra.is_empty() {
            self.nationality = nationality_pattern(extra)?;
        }
        Ok(self)
    }

    fn build_record(&self, block: &str) -> Option<OfficerRecord> {
        let name = OFFICER_NAME.search_clean(block).into_option()?;

        let address = OFFICER_ADDRESS
            .search(block)
            .as_str()
            .map(clean_officer_address)
            .unwrap_or_default();

        Some(OfficerRecord {
            name,
            id: OFFICER_ID.search_clean(block),
            nationality: self.nationality.search_clean(block),
            address_source: ADDRESS_SOURCE.search_clean(block),
            address,
            position: POSITION.search_clean(block),
            appointed_on: APPOINTMENT_DATE.search_clean(block),
        })
    }
}

impl Default for OfficersExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionExtractor for OfficersExtractor {
    type Output = Vec<OfficerRecord>;

    fn section(&self) -> &'static str {
        OFFICERS_SECTION.name()
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let section = OFFICERS_SECTION.slice(text)?;

        Some(
            split_blocks(section)
                .into_iter()
                .filter_map(|block| self.build_record(block))
                .collect(),
        )
    }
}

/// Split an officers section into person blocks, in document order.
///
/// Text before the first anchor (column headings) belongs to no block.
pub fn split_blocks(section: &str) -> Vec<&str> {
    let starts: Vec<usize> = OFFICER_BLOCK_START
        .find_iter(section)
        .map(|m| m.start())
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(section.len());
            &section[start..end]
        })
        .collect()
}

/// Normalise a captured officer address into one comma-separated line.
///
/// OCR often leaves the tail of the preceding date (`2018` -> `018`) in front of
/// the house number; that fragment is dropped. Role words that the layout
/// interleaves with the address lines are removed.
pub fn clean_officer_address(raw: &str) -> Field {
    let stripped = if STRAY_PREFIX_LINE.is_match(raw) {
        STRAY_PREFIX_LINE.replace(raw, "")
    } else {
        STRAY_PREFIX_NUMBER.replace(raw, "$1")
    };

    let without_roles = ROLE_WORDS.replace_all(&stripped, "");
    let joined = LINE_BREAK.replace_all(without_roles.trim(), ", ");
    let collapsed = SPACE_RUN.replace_all(&joined, " ");

    Field::new(collapsed)
}
