//! Ticketing domain module (ticket purchases).
//!
//! This crate validates purchase requests, derives the seats and price they
//! need, and dispatches exactly two commands to external collaborators: reserve
//! the seats, then take the payment. It performs no IO of its own; collaborators
//! are injected behind traits.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod in_memory;
pub mod processor;
pub mod request;

pub use collaborators::{CollaboratorError, PaymentService, SeatReservationService};
pub use config::{ConfigError, DEFAULT_MAX_TICKETS_PER_PURCHASE, TicketingConfig};
pub use error::{InvalidPurchase, PurchaseError, PurchaseResult};
pub use in_memory::{CallLog, CollaboratorCall, InMemoryPayments, InMemorySeatReservation};
pub use processor::{PurchaseProcessor, PurchaseQuote, PurchaseReceipt};
pub use request::{PurchaseRequest, TicketRequestLine};

pub use boxoffice_core::{AccountId, Money};
pub use boxoffice_pricing::{PriceCatalog, PricingError, TicketCategory};
