//! Capital section: issued share capital, paid-up capital and treasury shares.

use crate::models::record::{CapitalBlock, IssuedCapital, PaidUpCapital, TreasuryShares};

use super::SectionExtractor;
use super::patterns::{
    CAPITAL_SECTION, ISSUED_AMOUNT, ISSUED_BLOCK, ISSUED_CURRENCY, ISSUED_SHARES,
    ISSUED_SHARE_TYPE, PAID_UP_AMOUNT, PAID_UP_BLOCK, PAID_UP_CURRENCY, PAID_UP_SHARE_TYPE,
    TREASURY_CURRENCY, TREASURY_SHARES,
};

/// Capital section extractor.
#[derive(Debug, Clone, Default)]
pub struct CapitalExtractor;

impl CapitalExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl SectionExtractor for CapitalExtractor {
    type Output = CapitalBlock;

    fn section(&self) -> &'static str {
        CAPITAL_SECTION.name()
    }

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let section = CAPITAL_SECTION.slice(text)?;

        let issued = ISSUED_BLOCK
            .block(section)
            .map(|block| IssuedCapital {
                amount: ISSUED_AMOUNT.search_clean(block),
                number_of_shares: ISSUED_SHARES.search_clean(block),
                currency: ISSUED_CURRENCY.search_clean(block),
                share_type: ISSUED_SHARE_TYPE.search_clean(block),
            })
            .unwrap_or_default();

        let paid_up = PAID_UP_BLOCK
            .block(section)
            .map(|block| PaidUpCapital {
                amount: PAID_UP_AMOUNT.search_clean(block),
                currency: PAID_UP_CURRENCY.search_clean(block),
                share_type: PAID_UP_SHARE_TYPE.search_clean(block),
            })
            .unwrap_or_default();

        // Treasury lines may sit anywhere in the section.
        let treasury = TreasuryShares {
            number_of_shares: TREASURY_SHARES.search_clean(section),
            currency: TREASURY_CURRENCY.search_clean(section),
        };

        Some(CapitalBlock {
            issued,
            paid_up,
            treasury,
        })
    }
}
