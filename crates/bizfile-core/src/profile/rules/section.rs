//! Header/terminator slicing of certificate sections.
//!
//! A section starts at the first occurrence of its header marker and runs to
//! the earliest following terminator marker, or to the end of the text. All
//! markers are literal phrases matched case-insensitively.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

/// Location of a section within the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Byte range of the header marker.
    pub header: Range<usize>,
    /// Byte range between the header and the terminator.
    pub body: Range<usize>,
}

/// A section defined by a header marker and an ordered list of terminators.
#[derive(Debug, Clone)]
pub struct Section {
    name: &'static str,
    header: Regex,
    terminator: Option<Regex>,
}

impl Section {
    /// Build a section from literal markers.
    ///
    /// When two terminators occur at the same position the one listed first wins.
    pub fn new(
        name: &'static str,
        header: &str,
        terminators: &[&str],
    ) -> Result<Self, regex::Error> {
        let header = literal(&regex::escape(header))?;
        let terminator = if terminators.is_empty() {
            None
        } else {
            let alternation = terminators
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            Some(literal(&alternation)?)
        };

        Ok(Self {
            name,
            header,
            terminator,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Find the section, or `None` when the header is absent.
    pub fn locate(&self, text: &str) -> Option<SectionSpan> {
        let header = self.header.find(text)?;
        let end = self
            .terminator
            .as_ref()
            .and_then(|t| t.find_at(text, header.end()))
            .map(|m| m.start())
            .unwrap_or(text.len());

        Some(SectionSpan {
            header: header.range(),
            body: header.end()..end,
        })
    }

    /// Text after the header, up to the terminator.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.locate(text).map(|span| &text[span.body])
    }

    /// Header and body together.
    pub fn block<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.locate(text)
            .map(|span| &text[span.header.start..span.body.end])
    }
}

fn literal(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn abbreviations() -> Section {
        Section::new("abbreviations", "Abbreviation", &["Note", "FOR REGISTRAR"]).unwrap()
    }

    #[test]
    fn test_slice_stops_at_first_terminator() {
        let text = "Abbreviation\nUL - Local\nFOR REGISTRAR\nNote : x";
        assert_eq!(abbreviations().slice(text), Some("\nUL - Local\n"));
    }

    #[test]
    fn test_slice_runs_to_end_without_terminator() {
        let text = "intro\nABBREVIATION\nAGM - Annual General Meeting";
        assert_eq!(
            abbreviations().slice(text),
            Some("\nAGM - Annual General Meeting")
        );
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(abbreviations().slice("no glossary here"), None);
        assert_eq!(abbreviations().locate(""), None);
    }

    #[test]
    fn test_markers_are_literal() {
        let section = Section::new("shareholders", "Shareholder(s)", &["Note :"]).unwrap();
        let text = "Shareholders\nShareholder(s)\nJOHN\nNote : end";

        assert_eq!(section.slice(text), Some("\nJOHN\n"));
        assert_eq!(section.block(text), Some("Shareholder(s)\nJOHN\n"));
    }

    #[test]
    fn test_terminator_right_after_header() {
        let text = "AbbreviationNote";
        let span = abbreviations().locate(text).unwrap();
        assert_eq!(span.body, 12..12);
    }
}
