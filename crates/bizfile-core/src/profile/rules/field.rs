//! Single-field matching and value normalisation.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::error::ExtractionError;
use crate::models::record::Field;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// A pattern with exactly one capturing group.
///
/// Always matched case-insensitively with `.` spanning line breaks. Parts of a
/// pattern that must stay case-sensitive opt out with `(?-i:...)`.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    regex: Regex,
}

impl FieldPattern {
    pub fn new(pattern: &str) -> Result<Self, ExtractionError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| ExtractionError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(ExtractionError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: format!("expected exactly one capturing group, found {}", groups),
            });
        }

        Ok(Self { regex })
    }

    /// Search `scope` and return the trimmed capture, or `Unresolved`.
    pub fn search(&self, scope: &str) -> Field {
        self.capture(scope).map(Field::new).unwrap_or_default()
    }

    /// Like [`search`](Self::search), with the capture passed through [`clean_value`].
    pub fn search_clean(&self, scope: &str) -> Field {
        self.capture(scope).map(clean_value).unwrap_or_default()
    }

    pub fn is_match(&self, scope: &str) -> bool {
        self.regex.is_match(scope)
    }

    fn capture<'a>(&self, scope: &'a str) -> Option<&'a str> {
        self.regex
            .captures(scope)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Normalise a captured value: single-line, single-spaced, trimmed.
///
/// Blank input yields `Unresolved`. Idempotent over rendered output.
pub fn clean_value(raw: &str) -> Field {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Field::Unresolved;
    }

    let single_line = trimmed.replace('\n', " ");
    let collapsed = WHITESPACE_RUN.replace_all(&single_line, " ");
    Field::new(collapsed)
}
