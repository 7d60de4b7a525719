//! Section markers and field patterns for ACRA business profile certificates.
//!
//! Marker literals mirror the printed certificate template and must match it
//! exactly. Field patterns go through [`FieldPattern`], so they are
//! case-insensitive and dot-all unless they opt out.

use lazy_static::lazy_static;
use regex::Regex;

use super::field::FieldPattern;
use super::section::Section;
use crate::error::ExtractionError;

/// Nationalities recognised in officer blocks.
pub const NATIONALITIES: &[&str] = &[
    "INDIAN",
    "SINGAPORE CITIZEN",
    "MALAYSIAN",
    "CHINESE",
    "SINGAPORE PR",
    "INDONESIAN",
    "FILIPINO",
    "BRITISH",
    "AMERICAN",
    "AUSTRALIAN",
];

/// Substring that triggers the single known-entity shareholder fallback.
pub const KNOWN_ENTITY_MARKER: &str = "INFOTRUST SINGAPORE PTE. LTD.";

lazy_static! {
    // Sections
    pub static ref OFFICERS_SECTION: Section = Section::new(
        "officers",
        "Officers/Authorised Representative(s)",
        &["Shareholder(s)", "Abbreviation", "Note", "FOR REGISTRAR"],
    ).unwrap();

    pub static ref SHAREHOLDERS_SECTION: Section = Section::new(
        "shareholders",
        "Shareholder(s)",
        &["Abbreviation", "Note :", "FOR REGISTRAR"],
    ).unwrap();

    pub static ref ABBREVIATIONS_SECTION: Section = Section::new(
        "abbreviations",
        "Abbreviation",
        &["Note", "FOR REGISTRAR"],
    ).unwrap();

    pub static ref CAPITAL_SECTION: Section = Section::new(
        "capital",
        "Capital",
        &[
            "Registered Office Address",
            "Officers",
            "Shareholder",
            "Abbreviation",
            "Note",
            "FOR REGISTRAR",
        ],
    ).unwrap();

    pub static ref ISSUED_BLOCK: Section = Section::new(
        "issued share capital",
        "Issued Share Capital",
        &["Paid-Up Capital"],
    ).unwrap();

    pub static ref PAID_UP_BLOCK: Section = Section::new(
        "paid-up capital",
        "Paid-Up Capital",
        &["COMPANY HAS", "Registered Office", "Officers"],
    ).unwrap();

    // Particulars
    pub static ref REGISTRATION_NO: FieldPattern = FieldPattern::new(
        r"Registration No\.\s*:\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref COMPANY_NAME: FieldPattern = FieldPattern::new(
        r"Company Name\.\s*:\s*([A-Z0-9\s\.\-&]+)(?:\nFormer Name|Incorporation|$)"
    ).unwrap();

    pub static ref FORMER_NAME: FieldPattern = FieldPattern::new(
        r"Former Name if any\s*:\s*(.*?)(?:Incorporation|Company Type)"
    ).unwrap();

    pub static ref INCORPORATION_DATE: FieldPattern = FieldPattern::new(
        r"Incorporation Date\.\s*:\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref COMPANY_TYPE: FieldPattern = FieldPattern::new(
        r"Company Type\s*:\s*(.*?)Status"
    ).unwrap();

    pub static ref STATUS: FieldPattern = FieldPattern::new(
        r"Status\s*:\s*(.*?)Status Date"
    ).unwrap();

    pub static ref STATUS_DATE: FieldPattern = FieldPattern::new(
        r"Status Date\s*:\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Principal activities
    pub static ref PRIMARY_ACTIVITY: FieldPattern = FieldPattern::new(
        r"Activities\s*\(I\)\s*:\s*(.*?)Description"
    ).unwrap();

    pub static ref PRIMARY_DESCRIPTION: FieldPattern = FieldPattern::new(
        r"Description\s*:\s*(.*?)Activities\s*\(II\)"
    ).unwrap();

    pub static ref SECONDARY_ACTIVITY: FieldPattern = FieldPattern::new(
        r"Activities\s*\(II\)\s*:\s*(.*?)Description"
    ).unwrap();

    pub static ref SECONDARY_DESCRIPTION: FieldPattern = FieldPattern::new(
        r"Activities\s*\(II\).*?Description\s*:\s*(.*?)\s*(?:Capital|Issued|Share|Paid|$)"
    ).unwrap();

    // Registered office
    pub static ref OFFICE_ADDRESS: FieldPattern = FieldPattern::new(
        r"Registered Office Address\s*:\s*(.*?)Date of Address"
    ).unwrap();

    pub static ref OFFICE_ADDRESS_DATE: FieldPattern = FieldPattern::new(
        r"Date of Address\s*:\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref LAST_AGM: FieldPattern = FieldPattern::new(
        r"Date of Last AGM\s*:\s*(.*?)Date of Last AR"
    ).unwrap();

    pub static ref LAST_ANNUAL_RETURN: FieldPattern = FieldPattern::new(
        r"Date of Last AR\s*:\s*(.*?)FYE"
    ).unwrap();

    pub static ref FINANCIAL_YEAR_END: FieldPattern = FieldPattern::new(
        r"FYE As At Date of Last AR\s*:\s*(.*?)(?:Audit Firms|Officers|$)"
    ).unwrap();

    // Officers: a block starts at an upper-case name line followed by an ID line
    pub static ref OFFICER_BLOCK_START: Regex = Regex::new(
        r"\n[A-Z][A-Z \t]*\nS\d{7}[A-Z]"
    ).unwrap();

    pub static ref OFFICER_NAME: FieldPattern = FieldPattern::new(
        r"\n((?-i:[A-Z][A-Z \t]*))\n(?-i:S\d{7}[A-Z])"
    ).unwrap();

    pub static ref OFFICER_ID: FieldPattern = FieldPattern::new(
        r"\n(S\d{7}[A-Z])"
    ).unwrap();

    pub static ref ADDRESS_SOURCE: FieldPattern = FieldPattern::new(
        r"\b(ACRA|IRAS|MOM)\b"
    ).unwrap();

    pub static ref POSITION: FieldPattern = FieldPattern::new(
        r"\b(Director|Secretary|Manager)\b"
    ).unwrap();

    pub static ref NATIONALITY: FieldPattern = nationality_pattern::<&str>(&[]).unwrap();

    pub static ref APPOINTMENT_DATE: FieldPattern = FieldPattern::new(
        r"(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref OFFICER_ADDRESS: FieldPattern = FieldPattern::new(
        r"(\d{1,3}\s+[A-Z0-9\s]+(?:ROAD|DRIVE|AVENUE|STREET|PLACE|LANE|CRESCENT|WALK|LOOP)[\s\S]*?\(\d{6}\))"
    ).unwrap();

    // Officer address cleanup
    pub static ref STRAY_PREFIX_LINE: Regex = Regex::new(r"^\d{2,3}[ \t]*\r?\n\s*").unwrap();
    pub static ref STRAY_PREFIX_NUMBER: Regex = Regex::new(r"^\d{2,3}[ \t]+(\d{1,3}[ \t])").unwrap();
    pub static ref ROLE_WORDS: Regex = Regex::new(r"\b(?:Director|Secretary)\b").unwrap();
    pub static ref LINE_BREAK: Regex = Regex::new(r"\s*\n\s*").unwrap();
    pub static ref SPACE_RUN: Regex = Regex::new(r"\s{2,}").unwrap();

    // Shareholders
    pub static ref PAGE_FOOTER: Regex = Regex::new(r"Page\s*\d+\s*of\s*\d+").unwrap();
    pub static ref AUTHENTICATION_NO: Regex = Regex::new(r"Authentication No\.").unwrap();
    pub static ref NEWLINE_RUN: Regex = Regex::new(r"\n+").unwrap();
    pub static ref BLANK_LINE: Regex = Regex::new(r"\n\s*\n").unwrap();

    pub static ref SHAREHOLDER_RECORD: Regex = Regex::new(concat!(
        r"(?m)^(?P<name>[A-Z0-9][A-Z0-9 \t.&-]*(?:\n[A-Z0-9][A-Z0-9 \t.&-]*)*?)[ \t]*\n",
        r"(?P<id>[A-Z0-9]{8,})[ \t]*\n",
        r"(?P<nationality>[A-Z][A-Z \t]*?)[ \t]*\n",
        r"(?P<source>[A-Z]+)\b",
        r"(?s:(?P<body>.*?))",
        r"(?i:Ordinary\s*\(Number\))\s*(?P<ordinary>\d[\d,]*)\s*",
        r"(?i:Currency)\s*(?P<currency>[A-Z][A-Z \t]*(?:,[ \t]*\n?[ \t]*[A-Z][A-Z \t]*)*)",
    )).unwrap();

    pub static ref SHAREHOLDER_ADDRESS: FieldPattern = FieldPattern::new(
        r"(\d{1,3}.*?\(\d{6}\))"
    ).unwrap();

    // Abbreviations
    pub static ref ABBREVIATION_ENTRY: Regex = Regex::new(r"([A-Z]{2,})\s*-\s*").unwrap();
    pub static ref ABBREVIATION_NEXT: Regex = Regex::new(r"\n[A-Z]{2,}\s*-").unwrap();

    // Capital
    pub static ref ISSUED_AMOUNT: FieldPattern = FieldPattern::new(
        r"Issued Share Capital.*?\(AMOUNT\)\s*([\d,]+)"
    ).unwrap();

    pub static ref ISSUED_SHARES: FieldPattern = FieldPattern::new(
        r"Issued Share Capital[\s\S]*?Number of Shares.*?\n(\d{1,9})"
    ).unwrap();

    pub static ref ISSUED_CURRENCY: FieldPattern = FieldPattern::new(
        r"Issued Share Capital[\s\S]*?Currency.*?\n([A-Z,\s]+DOLLARS)"
    ).unwrap();

    pub static ref ISSUED_SHARE_TYPE: FieldPattern = FieldPattern::new(
        r"Issued Share Capital[\s\S]*?Share Type.*?\n([A-Z]+)"
    ).unwrap();

    pub static ref PAID_UP_AMOUNT: FieldPattern = FieldPattern::new(
        r"Paid-Up Capital.*?\(AMOUNT\)\s*([\d,]+)"
    ).unwrap();

    pub static ref PAID_UP_CURRENCY: FieldPattern = FieldPattern::new(
        r"Paid-Up Capital[\s\S]*?Currency.*?\n([A-Z,\s]+DOLLARS)"
    ).unwrap();

    pub static ref PAID_UP_SHARE_TYPE: FieldPattern = FieldPattern::new(
        r"Paid-Up Capital[\s\S]*?Share Type.*?\n([A-Z]+)"
    ).unwrap();

    // Treasury lines print a dash when the company holds none
    pub static ref TREASURY_SHARES: FieldPattern = FieldPattern::new(
        r"COMPANY HAS.*?Number Of Shares.*?\n([\d,]+|\x{2014})"
    ).unwrap();

    pub static ref TREASURY_CURRENCY: FieldPattern = FieldPattern::new(
        r"COMPANY HAS.*?Currency.*?\n([A-Z,\s]+DOLLARS|\x{2014})"
    ).unwrap();
}

/// Build the nationality matcher from the built-in set plus `extra` phrases.
///
/// Phrases are matched literally as whole words, with any amount of whitespace
/// between their words.
pub fn nationality_pattern<S: AsRef<str>>(extra: &[S]) -> Result<FieldPattern, ExtractionError> {
    let mut phrases: Vec<&str> = NATIONALITIES.to_vec();
    phrases.extend(extra.iter().map(|s| s.as_ref()));

    let alternatives = phrases
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|phrase| {
            phrase
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s*")
        })
        .collect::<Vec<_>>()
        .join("|");

    FieldPattern::new(&format!(r"\b({})\b", alternatives))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_particulars_patterns() {
        let text = "Registration No. : 200601400N\n\
                    Company Name. : INFOTRUST SINGAPORE PTE. LTD.\n\
                    Former Name if any : NIL\n\
                    Incorporation Date. : 11/01/2006\n\
                    Company Type : EXEMPT PRIVATE COMPANY LIMITED BY SHARES\n\
                    Status : LIVE COMPANY\n\
                    Status Date : 11/01/2006\n";

        assert_eq!(REGISTRATION_NO.search(text), Field::new("200601400N"));
        assert_eq!(
            COMPANY_NAME.search(text),
            Field::new("INFOTRUST SINGAPORE PTE. LTD.")
        );
        assert_eq!(FORMER_NAME.search(text), Field::new("NIL"));
        assert_eq!(INCORPORATION_DATE.search(text), Field::new("11/01/2006"));
        assert_eq!(STATUS.search(text), Field::new("LIVE COMPANY"));
        assert_eq!(STATUS_DATE.search(text), Field::new("11/01/2006"));
    }

    #[test]
    fn test_secondary_description_stops_at_capital() {
        let text = "Activities (II) : OTHER IT SERVICES (62090)\n\
                    Description : SYSTEM INTEGRATION\n\
                    Capital\nIssued Share Capital";

        assert_eq!(
            SECONDARY_DESCRIPTION.search(text),
            Field::new("SYSTEM INTEGRATION")
        );
        assert_eq!(
            SECONDARY_ACTIVITY.search(text),
            Field::new("OTHER IT SERVICES (62090)")
        );
    }

    #[test]
    fn test_officer_block_start_requires_upper_case_name() {
        let text = "\nName\nS1234567D\n\nTAN AH KOW\nS1234567D\n";
        let starts: Vec<usize> = OFFICER_BLOCK_START.find_iter(text).map(|m| m.start()).collect();

        assert_eq!(starts, vec![text.find("\nTAN").unwrap()]);
    }

    #[test]
    fn test_nationality_pattern() {
        let pattern = nationality_pattern::<&str>(&[]).unwrap();

        assert_eq!(
            pattern.search_clean("X\nSINGAPORE  CITIZEN\nACRA"),
            Field::new("SINGAPORE CITIZEN")
        );
        assert_eq!(
            pattern.search_clean("X\nSINGAPORE\nCITIZEN\nACRA"),
            Field::new("SINGAPORE CITIZEN")
        );
        assert_eq!(pattern.search("THAI"), Field::Unresolved);
        // whole words only
        assert_eq!(pattern.search("MALAYSIANS"), Field::Unresolved);

        let extended = nationality_pattern(&["THAI", "  "]).unwrap();
        assert_eq!(extended.search("\nTHAI\n"), Field::new("THAI"));
    }

    #[test]
    fn test_extra_nationality_is_literal() {
        let pattern = nationality_pattern(&["U.S. CITIZEN"]).unwrap();
        assert_eq!(pattern.search("\nU.S. CITIZEN\n"), Field::new("U.S. CITIZEN"));
        assert_eq!(pattern.search("\nUSA CITIZEN\n"), Field::Unresolved);
    }
}
