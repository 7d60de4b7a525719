//! Business profile record produced by the extraction engine.
//!
//! Serialised keys follow the labels printed on the certificate, so the JSON
//! output can be read side by side with the source document.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rendered value of a field that could not be located in the source text.
pub const SENTINEL: &str = "\u{2014}";

/// A scalar field value.
///
/// `Unresolved` is rendered as [`SENTINEL`] only when serialised or displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Field {
    /// The field was not found, or matched only whitespace.
    #[default]
    Unresolved,
    /// A populated, trimmed value.
    Value(String),
}

impl Field {
    /// Build a field from raw text. Blank text and the literal sentinel are unresolved.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() || trimmed == SENTINEL {
            Self::Unresolved
        } else {
            Self::Value(trimmed.to_string())
        }
    }

    /// The populated value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Unresolved => None,
            Self::Value(value) => Some(value),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The value as it appears in serialised output.
    pub fn render(&self) -> &str {
        self.as_str().unwrap_or(SENTINEL)
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Unresolved => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        value.map(Field::new).unwrap_or_default()
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::new(value)
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.render())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Field::new(raw))
    }
}

/// The complete record extracted from one certificate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Registration particulars.
    #[serde(rename = "The Following Are The Brief Particulars of :")]
    pub particulars: Particulars,

    /// Principal activities.
    #[serde(rename = "Principal Activities")]
    pub principal_activities: PrincipalActivities,

    /// Issued, paid-up and treasury capital.
    #[serde(rename = "Capital")]
    pub capital: CapitalBlock,

    /// Registered office and filing dates.
    #[serde(rename = "Registered Office Address")]
    pub registered_office: RegisteredOffice,

    /// Officers in document order.
    #[serde(rename = "Officers / Authorised Representative(s)")]
    pub officers: Vec<OfficerRecord>,

    /// Shareholders in document order.
    #[serde(rename = "Shareholder(s)")]
    pub shareholders: Vec<ShareholderRecord>,

    /// Abbreviation glossary, code to definition.
    #[serde(rename = "Abbreviation")]
    pub abbreviations: BTreeMap<String, Field>,
}

impl ExtractionRecord {
    /// List every unresolved scalar field as `"<group> / <label>"`.
    pub fn missing_fields(&self) -> Vec<String> {
        let groups: [(&str, Vec<(&'static str, &Field)>); 4] = [
            ("Particulars", self.particulars.fields()),
            ("Principal Activities", self.principal_activities.fields()),
            ("Capital", self.capital.fields()),
            ("Registered Office Address", self.registered_office.fields()),
        ];

        groups
            .iter()
            .flat_map(|(group, fields)| {
                fields
                    .iter()
                    .filter(|(_, field)| !field.is_resolved())
                    .map(move |(label, _)| format!("{} / {}", group, label))
            })
            .collect()
    }
}

/// Brief particulars of the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Particulars {
    #[serde(rename = "Registration No.")]
    pub registration_no: Field,

    #[serde(rename = "Company Name.")]
    pub company_name: Field,

    #[serde(rename = "Former Name if any")]
    pub former_name: Field,

    #[serde(rename = "Incorporation Date.")]
    pub incorporation_date: Field,

    #[serde(rename = "Company Type")]
    pub company_type: Field,

    #[serde(rename = "Status")]
    pub status: Field,

    #[serde(rename = "Status Date")]
    pub status_date: Field,
}

impl Particulars {
    /// Labelled view over the fields, in certificate order.
    pub fn fields(&self) -> Vec<(&'static str, &Field)> {
        vec![
            ("Registration No.", &self.registration_no),
            ("Company Name.", &self.company_name),
            ("Former Name if any", &self.former_name),
            ("Incorporation Date.", &self.incorporation_date),
            ("Company Type", &self.company_type),
            ("Status", &self.status),
            ("Status Date", &self.status_date),
        ]
    }
}

/// Principal activities with their free-text descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrincipalActivities {
    #[serde(rename = "Activities (I)")]
    pub primary_activity: Field,

    #[serde(rename = "Description (I)")]
    pub primary_description: Field,

    #[serde(rename = "Activities (II)")]
    pub secondary_activity: Field,

    #[serde(rename = "Description (II)")]
    pub secondary_description: Field,
}

impl PrincipalActivities {
    pub fn fields(&self) -> Vec<(&'static str, &Field)> {
        vec![
            ("Activities (I)", &self.primary_activity),
            ("Description (I)", &self.primary_description),
            ("Activities (II)", &self.secondary_activity),
            ("Description (II)", &self.secondary_description),
        ]
    }
}

/// Capital structure, serialised as one flat mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalBlock {
    #[serde(flatten)]
    pub issued: IssuedCapital,

    #[serde(flatten)]
    pub paid_up: PaidUpCapital,

    #[serde(flatten)]
    pub treasury: TreasuryShares,
}

impl CapitalBlock {
    pub fn fields(&self) -> Vec<(&'static str, &Field)> {
        vec![
            ("Issued Share Capital (AMOUNT)", &self.issued.amount),
            ("Issued Number of Shares", &self.issued.number_of_shares),
            ("Issued Currency", &self.issued.currency),
            ("Issued Share Type", &self.issued.share_type),
            ("Paid-Up Capital (AMOUNT)", &self.paid_up.amount),
            ("Paid Currency", &self.paid_up.currency),
            ("Paid Share Type", &self.paid_up.share_type),
            ("Treasury Number Of Shares", &self.treasury.number_of_shares),
            ("Treasury Currency", &self.treasury.currency),
        ]
    }
}

/// Issued share capital.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuedCapital {
    #[serde(rename = "Issued Share Capital (AMOUNT)")]
    pub amount: Field,

    #[serde(rename = "Issued Number of Shares")]
    pub number_of_shares: Field,

    #[serde(rename = "Issued Currency")]
    pub currency: Field,

    #[serde(rename = "Issued Share Type")]
    pub share_type: Field,
}

/// Paid-up capital. The certificate prints no share count for this block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaidUpCapital {
    #[serde(rename = "Paid-Up Capital (AMOUNT)")]
    pub amount: Field,

    #[serde(rename = "Paid Currency")]
    pub currency: Field,

    #[serde(rename = "Paid Share Type")]
    pub share_type: Field,
}

/// Treasury shares held by the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreasuryShares {
    #[serde(rename = "Treasury Number Of Shares")]
    pub number_of_shares: Field,

    #[serde(rename = "Treasury Currency")]
    pub currency: Field,
}

/// Registered office address and filing dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisteredOffice {
    #[serde(rename = "Address")]
    pub address: Field,

    #[serde(rename = "Date of Address")]
    pub address_date: Field,

    #[serde(rename = "Date of Last AGM")]
    pub last_agm: Field,

    #[serde(rename = "Date of Last AR")]
    pub last_annual_return: Field,

    #[serde(rename = "FYE As At Date of Last AR")]
    pub financial_year_end: Field,
}

impl RegisteredOffice {
    pub fn fields(&self) -> Vec<(&'static str, &Field)> {
        vec![
            ("Address", &self.address),
            ("Date of Address", &self.address_date),
            ("Date of Last AGM", &self.last_agm),
            ("Date of Last AR", &self.last_annual_return),
            ("FYE As At Date of Last AR", &self.financial_year_end),
        ]
    }
}

/// An officer or authorised representative.
///
/// Blocks whose name cannot be resolved never become records, so `name` is
/// always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficerRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "ID")]
    pub id: Field,

    #[serde(rename = "Nationality / Citizenship")]
    pub nationality: Field,

    #[serde(rename = "Source of Address")]
    pub address_source: Field,

    #[serde(rename = "Address")]
    pub address: Field,

    #[serde(rename = "Position Held")]
    pub position: Field,

    #[serde(rename = "Date of Appointment")]
    pub appointed_on: Field,
}

/// A shareholder entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareholderRecord {
    #[serde(rename = "Name")]
    pub name: Field,

    #[serde(rename = "ID")]
    pub id: Field,

    #[serde(rename = "Nationality / Citizenship / Place of Incorporation")]
    pub nationality: Field,

    #[serde(rename = "Source of Address")]
    pub address_source: Field,

    #[serde(rename = "Address")]
    pub address: Field,

    #[serde(rename = "Ordinary (Number)")]
    pub ordinary_shares: Field,

    #[serde(rename = "Currency")]
    pub currency: Field,
}
