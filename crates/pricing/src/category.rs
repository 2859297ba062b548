use core::str::FromStr;
use serde::{Deserialize, Serialize};

use boxoffice_core::{DomainError, ValueObject};

/// Ticket category: a closed classification driving price and seat requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Every category, in catalog order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "adult",
            TicketCategory::Child => "child",
            TicketCategory::Infant => "infant",
        }
    }

    pub fn is_adult(&self) -> bool {
        matches!(self, TicketCategory::Adult)
    }

    /// Infants sit on an adult's lap and do not get a seat of their own.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }
}

impl ValueObject for TicketCategory {}

impl core::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TicketCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown ticket category: {wanted}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_infants_go_without_a_seat() {
        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Adult".parse::<TicketCategory>().unwrap(), TicketCategory::Adult);
        assert_eq!("CHILD".parse::<TicketCategory>().unwrap(), TicketCategory::Child);
        assert_eq!(" infant".parse::<TicketCategory>().unwrap(), TicketCategory::Infant);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "senior".parse::<TicketCategory>().unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("senior") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&TicketCategory::Infant).unwrap();
        assert_eq!(json, "\"infant\"");

        let parsed: TicketCategory = serde_json::from_str("\"child\"").unwrap();
        assert_eq!(parsed, TicketCategory::Child);
    }
}
