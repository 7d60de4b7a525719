//! Abbreviation glossary printed at the end of the certificate.

use std::collections::BTreeMap;

use crate::models::record::Field;

use super::SectionExtractor;
use super::field::clean_value;
use super::patterns::{ABBREVIATIONS_SECTION, ABBREVIATION_ENTRY, ABBREVIATION_NEXT};

/// Abbreviations section extractor.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationsExtractor;

impl AbbreviationsExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl SectionExtractor for AbbreviationsExtractor {
    type Output = BTreeMap<String, Field>;

    fn section(&self) -> &'static str {
        ABBREVIATIONS_SECTION.name()
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let section = ABBREVIATIONS_SECTION.slice(text)?;
        Some(parse_entries(section))
    }
}

/// Parse `CODE - definition` entries. A definition runs until the next line
/// that opens another entry. Later duplicates replace earlier ones.
fn parse_entries(section: &str) -> BTreeMap<String, Field> {
    let mut entries = BTreeMap::new();
    let mut pos = 0;

    while let Some(caps) = ABBREVIATION_ENTRY.captures_at(section, pos) {
        let (Some(entry), Some(code)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let definition_end = ABBREVIATION_NEXT
            .find_at(section, entry.end())
            .map_or(section.len(), |next| next.start());

        entries.insert(
            code.as_str().to_string(),
            clean_value(&section[entry.end()..definition_end]),
        );
        pos = definition_end;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_abbreviation_map() {
        let text = "Abbreviation\nUL - Local Entity not registered with ACRA\nAGM - Annual General Meeting\nNote";
        let map = AbbreviationsExtractor::new().extract(text).unwrap();

        let expected: BTreeMap<String, Field> = [
            ("UL".to_string(), Field::new("Local Entity not registered with ACRA")),
            ("AGM".to_string(), Field::new("Annual General Meeting")),
        ]
        .into_iter()
        .collect();
        assert_eq!(map, expected);
    }

    #[test]
    fn test_multiline_definition_and_duplicates() {
        let text = "ABBREVIATION\nAR - Annual\nReturn\nFYE - Financial Year End\nAR - Annual Return";
        let map = AbbreviationsExtractor::new().extract(text).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map["AR"], Field::new("Annual Return"));
        assert_eq!(map["FYE"], Field::new("Financial Year End"));
    }

    #[test]
    fn test_empty_definition_is_unresolved() {
        let map = AbbreviationsExtractor::new()
            .extract("Abbreviation\nUL -\nFOR REGISTRAR")
            .unwrap();
        assert_eq!(map["UL"], Field::Unresolved);
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(AbbreviationsExtractor::new().extract("UL - Local"), None);
    }
}
