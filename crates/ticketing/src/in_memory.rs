//! In-memory collaborators for tests/dev.
//!
//! - No IO
//! - Every successful command is appended to a [`CallLog`]
//! - Share one log between both collaborators to observe dispatch order

use std::sync::{Arc, Mutex};

use boxoffice_core::{AccountId, Money};

use crate::collaborators::{CollaboratorError, PaymentService, SeatReservationService};

/// A command received by an in-memory collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorCall {
    ReserveSeat { account_id: AccountId, seat_count: u32 },
    MakePayment { account_id: AccountId, amount: Money },
}

/// Append-only, cloneable record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<CollaboratorCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: CollaboratorCall) -> Result<(), ()> {
        let mut calls = self.calls.lock().map_err(|_| ())?;
        calls.push(call);
        Ok(())
    }

    /// Snapshot of every call recorded so far, oldest first.
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.calls().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Seat reservation backend that only remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservation {
    log: CallLog,
    failure: Option<String>,
}

impl InMemorySeatReservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record into an existing (possibly shared) log.
    pub fn with_log(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    /// A backend that rejects every reservation with `reason` and records nothing.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            log: CallLog::new(),
            failure: Some(reason.into()),
        }
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }

    /// `(account, seats)` pairs reserved so far.
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.log
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::ReserveSeat { account_id, seat_count } => Some((account_id, seat_count)),
                CollaboratorCall::MakePayment { .. } => None,
            })
            .collect()
    }
}

impl SeatReservationService for InMemorySeatReservation {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u32) -> Result<(), CollaboratorError> {
        if let Some(reason) = &self.failure {
            return Err(CollaboratorError::Reservation(reason.clone()));
        }
        self.log
            .record(CollaboratorCall::ReserveSeat { account_id, seat_count })
            .map_err(|_| CollaboratorError::Reservation("call log poisoned".to_string()))
    }
}

/// Payment backend that only remembers what it was asked to charge.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPayments {
    log: CallLog,
    failure: Option<String>,
}

impl InMemoryPayments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    /// A backend that declines every payment with `reason` and records nothing.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            log: CallLog::new(),
            failure: Some(reason.into()),
        }
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }

    /// `(account, amount)` pairs charged so far.
    pub fn payments(&self) -> Vec<(AccountId, Money)> {
        self.log
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::MakePayment { account_id, amount } => Some((account_id, amount)),
                CollaboratorCall::ReserveSeat { .. } => None,
            })
            .collect()
    }
}

impl PaymentService for InMemoryPayments {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), CollaboratorError> {
        if let Some(reason) = &self.failure {
            return Err(CollaboratorError::Payment(reason.clone()));
        }
        self.log
            .record(CollaboratorCall::MakePayment { account_id, amount })
            .map_err(|_| CollaboratorError::Payment("call log poisoned".to_string()))
    }
}
