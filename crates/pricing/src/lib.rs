//! Pricing domain module (ticket categories and their unit prices).
//!
//! The catalog is a plain, read-only value constructed once and injected where
//! it is needed. It stands in for a real pricing service and keeps the same
//! single-query contract: one category in, one price (or "not found") out.

pub mod catalog;
pub mod category;

pub use catalog::{PriceCatalog, PricingError};
pub use category::TicketCategory;
