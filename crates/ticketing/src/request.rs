use serde::{Deserialize, Serialize};

use boxoffice_core::{AccountId, ValueObject};
use boxoffice_pricing::TicketCategory;

/// "N tickets of this category" within one purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequestLine {
    category: TicketCategory,
    count: u32,
}

impl TicketRequestLine {
    pub fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }

    pub fn adult(count: u32) -> Self {
        Self::new(TicketCategory::Adult, count)
    }

    pub fn child(count: u32) -> Self {
        Self::new(TicketCategory::Child, count)
    }

    pub fn infant(count: u32) -> Self {
        Self::new(TicketCategory::Infant, count)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Seats this line needs (zero for infants).
    pub fn seats(&self) -> u32 {
        if self.category.occupies_seat() {
            self.count
        } else {
            0
        }
    }
}

impl ValueObject for TicketRequestLine {}

/// A purchase request: one account, an ordered list of ticket lines.
///
/// Transient; it lives only for the duration of one purchase call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    account_id: AccountId,
    lines: Vec<TicketRequestLine>,
}

impl PurchaseRequest {
    pub fn new(account_id: AccountId, lines: impl Into<Vec<TicketRequestLine>>) -> Self {
        Self {
            account_id,
            lines: lines.into(),
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn lines(&self) -> &[TicketRequestLine] {
        &self.lines
    }
}

/// Total number of tickets across all lines, infants included.
pub(crate) fn total_tickets(lines: &[TicketRequestLine]) -> u64 {
    lines.iter().map(|l| u64::from(l.count)).sum()
}
