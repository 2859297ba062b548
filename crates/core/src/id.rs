//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a customer account placing a purchase.
///
/// Any integer is representable so that malformed ids (zero, negative) can reach
/// purchase validation and be rejected there with a precise reason.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Smallest account number that identifies a real account.
    pub const MIN_VALID: i64 = 1;

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Whether this id can belong to an account (strictly positive).
    pub fn is_valid(&self) -> bool {
        self.0 >= Self::MIN_VALID
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("AccountId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids_are_valid() {
        assert!(AccountId::new(1).is_valid());
        assert!(AccountId::new(i64::MAX).is_valid());
    }

    #[test]
    fn zero_and_negative_ids_are_invalid() {
        assert!(!AccountId::new(0).is_valid());
        assert!(!AccountId::new(-1).is_valid());
        assert!(!AccountId::new(i64::MIN).is_valid());
    }

    #[test]
    fn parses_from_string() {
        assert_eq!("42".parse::<AccountId>().unwrap(), AccountId::new(42));
        assert_eq!(" -3 ".parse::<AccountId>().unwrap(), AccountId::new(-3));

        let err = "abc".parse::<AccountId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("AccountId")));
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&AccountId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
