//! Business profile parser combining the section extractors.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::record::{
    ExtractionRecord, Particulars, PrincipalActivities, RegisteredOffice,
};

use super::rules::{
    patterns::*, AbbreviationsExtractor, CapitalExtractor, OfficersExtractor, SectionExtractor,
    ShareholdersExtractor,
};
use super::{ProfileExtractor, Result};

/// Result of profile extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: ExtractionRecord,
    /// Missing sections and unresolved fields.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for profile parsing with diagnostics.
pub trait RecordParser {
    /// Parse a profile from text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based business profile parser.
#[derive(Debug, Clone, Default)]
pub struct ProfileParser {
    officers: OfficersExtractor,
    shareholders: ShareholdersExtractor,
    capital: CapitalExtractor,
    abbreviations: AbbreviationsExtractor,
}

impl ProfileParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Self::new()
            .with_known_entity_fallback(config.known_entity_fallback)
            .with_extra_nationalities(&config.extra_nationalities)
    }

    /// Set the known-entity shareholder fallback.
    pub fn with_known_entity_fallback(mut self, enabled: bool) -> Self {
        self.shareholders = self.shareholders.with_known_entity_fallback(enabled);
        self
    }

    /// Recognise additional officer nationalities.
    pub fn with_extra_nationalities<S: AsRef<str>>(mut self, extra: &[S]) -> Result<Self> {
        self.officers = self.officers.with_extra_nationalities(extra)?;
        Ok(self)
    }

    fn extract_particulars(&self, text: &str) -> Particulars {
        Particulars {
            registration_no: REGISTRATION_NO.search_clean(text),
            company_name: COMPANY_NAME.search_clean(text),
            former_name: FORMER_NAME.search_clean(text),
            incorporation_date: INCORPORATION_DATE.search_clean(text),
            company_type: COMPANY_TYPE.search_clean(text),
            status: STATUS.search_clean(text),
            status_date: STATUS_DATE.search_clean(text),
        }
    }

    fn extract_principal_activities(&self, text: &str) -> PrincipalActivities {
        PrincipalActivities {
            primary_activity: PRIMARY_ACTIVITY.search_clean(text),
            primary_description: PRIMARY_DESCRIPTION.search_clean(text),
            secondary_activity: SECONDARY_ACTIVITY.search_clean(text),
            secondary_description: SECONDARY_DESCRIPTION.search_clean(text),
        }
    }

    fn extract_registered_office(&self, text: &str) -> RegisteredOffice {
        RegisteredOffice {
            address: OFFICE_ADDRESS.search_clean(text),
            address_date: OFFICE_ADDRESS_DATE.search_clean(text),
            last_agm: LAST_AGM.search_clean(text),
            last_annual_return: LAST_ANNUAL_RETURN.search_clean(text),
            financial_year_end: FINANCIAL_YEAR_END.search_clean(text),
        }
    }

    /// Build the record, collecting the names of sections whose header is absent.
    fn run(&self, text: &str) -> (ExtractionRecord, Vec<String>) {
        let mut warnings = Vec::new();

        let record = ExtractionRecord {
            particulars: self.extract_particulars(text),
            principal_activities: self.extract_principal_activities(text),
            capital: section_or_default(&self.capital, text, &mut warnings),
            registered_office: self.extract_registered_office(text),
            officers: section_or_default(&self.officers, text, &mut warnings),
            shareholders: section_or_default(&self.shareholders, text, &mut warnings),
            abbreviations: section_or_default(&self.abbreviations, text, &mut warnings),
        };

        debug!(
            "Extracted {} officers, {} shareholders, {} abbreviations",
            record.officers.len(),
            record.shareholders.len(),
            record.abbreviations.len()
        );

        (record, warnings)
    }
}

fn section_or_default<E>(extractor: &E, text: &str, warnings: &mut Vec<String>) -> E::Output
where
    E: SectionExtractor,
    E::Output: Default,
{
    match extractor.extract(text) {
        Some(output) => output,
        None => {
            debug!("Section '{}' not found", extractor.section());
            warnings.push(format!("Section not found: {}", extractor.section()));
            E::Output::default()
        }
    }
}

impl ProfileExtractor for ProfileParser {
    fn extract(&self, text: &str) -> ExtractionRecord {
        self.run(text).0
    }
}

impl RecordParser for ProfileParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing business profile from {} characters of text", text.len());

        let (record, mut warnings) = self.run(text);
        warnings.extend(
            record
                .missing_fields()
                .into_iter()
                .map(|field| format!("Could not extract {}", field)),
        );

        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Parsed profile in {}ms with {} warnings",
            processing_time_ms,
            warnings.len()
        );

        ExtractionResult {
            record,
            warnings,
            processing_time_ms,
        }
    }
}

/// Extract a record with the default parser.
pub fn extract_profile(text: &str) -> ExtractionRecord {
    ProfileParser::new().extract(text)
}
