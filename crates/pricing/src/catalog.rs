use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use boxoffice_core::{DomainError, Money};

use crate::category::TicketCategory;

/// Unit price of an adult ticket in the standard catalog.
pub const ADULT_PRICE: Money = Money::new(20);
/// Unit price of a child ticket in the standard catalog.
pub const CHILD_PRICE: Money = Money::new(10);
/// Infants travel free.
pub const INFANT_PRICE: Money = Money::new(0);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("no price configured for ticket category '{0}'")]
    UnknownCategory(TicketCategory),

    #[error("price overflow: {0}")]
    Overflow(String),
}

impl From<DomainError> for PricingError {
    fn from(value: DomainError) -> Self {
        PricingError::Overflow(value.to_string())
    }
}

/// Read-only mapping from ticket category to unit price.
///
/// Built once (from defaults or configuration) and then shared; there is no
/// mutation API. Serializes as a map keyed by lowercase category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceCatalog {
    prices: BTreeMap<TicketCategory, Money>,
}

impl PriceCatalog {
    /// The standard price list: adult 20, child 10, infant 0.
    pub fn standard() -> Self {
        Self::from_prices([
            (TicketCategory::Adult, ADULT_PRICE),
            (TicketCategory::Child, CHILD_PRICE),
            (TicketCategory::Infant, INFANT_PRICE),
        ])
    }

    /// Build a catalog from explicit entries. Later entries for the same
    /// category replace earlier ones; categories left out have no price.
    pub fn from_prices(entries: impl IntoIterator<Item = (TicketCategory, Money)>) -> Self {
        Self {
            prices: entries.into_iter().collect(),
        }
    }

    pub fn price_of(&self, category: TicketCategory) -> Result<Money, PricingError> {
        self.prices
            .get(&category)
            .copied()
            .ok_or(PricingError::UnknownCategory(category))
    }

    /// Price of `count` tickets of one category.
    pub fn line_total(&self, category: TicketCategory, count: u32) -> Result<Money, PricingError> {
        Ok(self.price_of(category)?.checked_mul(u64::from(count))?)
    }

    /// Configured entries in category order.
    pub fn entries(&self) -> impl Iterator<Item = (TicketCategory, Money)> + '_ {
        self.prices.iter().map(|(c, p)| (*c, *p))
    }

    pub fn contains(&self, category: TicketCategory) -> bool {
        self.prices.contains_key(&category)
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
