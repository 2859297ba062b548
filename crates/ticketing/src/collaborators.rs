//! Contracts for the external services a purchase is dispatched to.
//!
//! Both are synchronous, side-effecting black boxes. The processor never
//! catches or compensates their failures; an error returned here reaches the
//! caller unchanged.

use std::sync::Arc;

use thiserror::Error;

use boxoffice_core::{AccountId, Money};

/// Failure raised by a collaborator while carrying out a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("seat reservation failed: {0}")]
    Reservation(String),

    #[error("payment failed: {0}")]
    Payment(String),
}

/// Capability: can reserve seats for an account.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u32) -> Result<(), CollaboratorError>;
}

/// Capability: can take a payment from an account.
pub trait PaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError>;
}

macro_rules! forward_seat_reservation {
    ($($wrapper:ty),*) => {
        $(
            impl<T: SeatReservationService + ?Sized> SeatReservationService for $wrapper {
                fn reserve_seat(&self, account_id: AccountId, seat_count: u32) -> Result<(), CollaboratorError> {
                    (**self).reserve_seat(account_id, seat_count)
                }
            }
        )*
    };
}

macro_rules! forward_payment {
    ($($wrapper:ty),*) => {
        $(
            impl<T: PaymentService + ?Sized> PaymentService for $wrapper {
                fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError> {
                    (**self).make_payment(account_id, amount)
                }
            }
        )*
    };
}

forward_seat_reservation!(&T, Box<T>, Arc<T>);
forward_payment!(&T, Box<T>, Arc<T>);
