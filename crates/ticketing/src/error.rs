//! Purchase error model.

use thiserror::Error;

use boxoffice_core::AccountId;
use boxoffice_pricing::PricingError;

use crate::collaborators::CollaboratorError;

pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Why a purchase request was rejected before anything was dispatched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    #[error("invalid account id {0}: account ids start at 1")]
    InvalidAccount(AccountId),

    #[error("child and infant tickets require at least one adult ticket in the same purchase")]
    UnaccompaniedMinor,

    #[error("{requested} tickets requested, at most {limit} can be bought at once")]
    TicketLimitExceeded { requested: u64, limit: u32 },
}

impl InvalidPurchase {
    /// Short name of the violated rule (used as a log field).
    pub fn rule(&self) -> &'static str {
        match self {
            InvalidPurchase::InvalidAccount(_) => "account",
            InvalidPurchase::UnaccompaniedMinor => "accompaniment",
            InvalidPurchase::TicketLimitExceeded { .. } => "capacity",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The request broke a purchase rule; no collaborator was called.
    #[error("purchase rejected: {0}")]
    Rejected(#[from] InvalidPurchase),

    /// The request could not be priced; no collaborator was called.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A collaborator failed. Earlier side effects (if any) are not undone.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl PurchaseError {
    pub fn rejection(&self) -> Option<&InvalidPurchase> {
        match self {
            PurchaseError::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}
