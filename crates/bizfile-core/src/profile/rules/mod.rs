//! Rule-based section extractors for ACRA business profile certificates.

pub mod abbreviations;
pub mod capital;
pub mod field;
pub mod officers;
pub mod patterns;
pub mod section;
pub mod shareholders;

pub use abbreviations::AbbreviationsExtractor;
pub use capital::CapitalExtractor;
pub use field::{clean_value, FieldPattern};
pub use officers::{clean_officer_address, split_blocks, OfficersExtractor};
pub use section::{Section, SectionSpan};
pub use shareholders::ShareholdersExtractor;

/// Trait for section extractors.
pub trait SectionExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Short name of the section, used in diagnostics.
    fn section(&self) -> &'static str;

    /// Extract the section from the full document text.
    ///
    /// Returns `None` when the section header is absent.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
