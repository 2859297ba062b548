//! Purchase pipeline: validate → price → reserve seats → take payment.
//!
//! ```text
//! account + ticket lines
//!   ↓
//! 1. Validate (account, accompaniment, capacity; first failure wins)
//!   ↓
//! 2. Derive seats and total price from the catalog
//!   ↓
//! 3. Reserve seats
//!   ↓
//! 4. Take payment
//! ```
//!
//! Nothing is dispatched unless steps 1 and 2 succeed. Steps 3 and 4 are not
//! compensated: if payment fails after seats were reserved, the reservation
//! stands and the payment error is returned as-is.

use serde::{Deserialize, Serialize};

use boxoffice_core::{AccountId, Money};
use boxoffice_pricing::{PriceCatalog, PricingError};

use crate::collaborators::{PaymentService, SeatReservationService};
use crate::config::TicketingConfig;
use crate::error::{InvalidPurchase, PurchaseResult};
use crate::request::{PurchaseRequest, TicketRequestLine, total_tickets};

/// Seats and price derived from a valid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseQuote {
    pub account_id: AccountId,
    /// Tickets of every category, infants included.
    pub tickets: u32,
    pub seats: u32,
    pub total: Money,
}

/// What a completed purchase dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub account_id: AccountId,
    pub seats_reserved: u32,
    pub amount_charged: Money,
}

impl From<PurchaseQuote> for PurchaseReceipt {
    fn from(quote: PurchaseQuote) -> Self {
        Self {
            account_id: quote.account_id,
            seats_reserved: quote.seats,
            amount_charged: quote.total,
        }
    }
}

/// Validates ticket purchases and dispatches them to the seat reservation and
/// payment collaborators.
///
/// Holds no mutable state: every call is an independent transaction, and the
/// processor can be shared between threads whenever its collaborators can.
#[derive(Debug, Clone)]
pub struct PurchaseProcessor<R, P> {
    catalog: PriceCatalog,
    max_tickets: u32,
    reservations: R,
    payments: P,
}

impl<R, P> PurchaseProcessor<R, P> {
    /// Processor with the standard price list and ticket limit.
    pub fn new(reservations: R, payments: P) -> Self {
        Self::with_config(TicketingConfig::default(), reservations, payments)
    }

    pub fn with_config(config: TicketingConfig, reservations: R, payments: P) -> Self {
        Self {
            catalog: config.prices,
            max_tickets: config.max_tickets_per_purchase,
            reservations,
            payments,
        }
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn max_tickets_per_purchase(&self) -> u32 {
        self.max_tickets
    }

    pub fn into_parts(self) -> (R, P) {
        (self.reservations, self.payments)
    }

    /// Validate and price a purchase without dispatching anything.
    pub fn quote(&self, account_id: AccountId, lines: &[TicketRequestLine]) -> PurchaseResult<PurchaseQuote> {
        self.validate(account_id, lines).inspect_err(|reason| {
            tracing::debug!(rule = reason.rule(), %account_id, error = %reason, "purchase rejected");
        })?;

        self.derive(account_id, lines).inspect_err(|e| {
            tracing::debug!(%account_id, error = %e, "purchase could not be priced");
        })
    }

    fn validate(&self, account_id: AccountId, lines: &[TicketRequestLine]) -> Result<(), InvalidPurchase> {
        if !account_id.is_valid() {
            return Err(InvalidPurchase::InvalidAccount(account_id));
        }

        if !lines.iter().any(|line| line.category().is_adult()) {
            return Err(InvalidPurchase::UnaccompaniedMinor);
        }

        let requested = total_tickets(lines);
        if requested > u64::from(self.max_tickets) {
            return Err(InvalidPurchase::TicketLimitExceeded {
                requested,
                limit: self.max_tickets,
            });
        }

        Ok(())
    }

    // Runs after `validate`, so ticket and seat counts fit within the limit.
    fn derive(&self, account_id: AccountId, lines: &[TicketRequestLine]) -> PurchaseResult<PurchaseQuote> {
        let mut tickets = 0u32;
        let mut seats = 0u32;
        let mut total = Money::ZERO;

        for line in lines {
            tickets = tickets.saturating_add(line.count());
            seats = seats.saturating_add(line.seats());
            let line_total = self.catalog.line_total(line.category(), line.count())?;
            total = total.checked_add(line_total).map_err(PricingError::from)?;
        }

        Ok(PurchaseQuote {
            account_id,
            tickets,
            seats,
            total,
        })
    }
}

impl<R, P> PurchaseProcessor<R, P>
where
    R: SeatReservationService,
    P: PaymentService,
{
    /// Validate a purchase, reserve its seats, then take payment.
    ///
    /// Returns the first violated rule without calling any collaborator.
    /// Collaborator failures are returned unchanged.
    pub fn purchase(&self, account_id: AccountId, lines: &[TicketRequestLine]) -> PurchaseResult<PurchaseReceipt> {
        let span = tracing::info_span!("purchase", %account_id, lines = lines.len());
        let _entered = span.enter();

        let quote = self.quote(account_id, lines)?;

        self.reservations
            .reserve_seat(account_id, quote.seats)
            .inspect_err(|e| tracing::warn!(seats = quote.seats, error = %e, "seat reservation failed"))?;

        self.payments
            .make_payment(account_id, quote.total)
            .inspect_err(|e| {
                tracing::warn!(
                    seats = quote.seats,
                    amount = %quote.total,
                    error = %e,
                    "payment failed after seats were reserved"
                )
            })?;

        tracing::info!(seats = quote.seats, amount = %quote.total, "purchase completed");
        Ok(PurchaseReceipt::from(quote))
    }

    pub fn purchase_request(&self, request: &PurchaseRequest) -> PurchaseResult<PurchaseReceipt> {
        self.purchase(request.account_id(), request.lines())
    }
}
