//! Ticketing configuration (purchase limit and price list).
//!
//! Defaults match the standard box office rules. Values can be loaded from a
//! JSON document or from `BOXOFFICE_*` environment variables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use boxoffice_core::Money;
use boxoffice_pricing::{PriceCatalog, TicketCategory};

/// Most tickets a single purchase may contain.
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 20;

pub const ENV_MAX_TICKETS: &str = "BOXOFFICE_MAX_TICKETS";
pub const ENV_PRICE_ADULT: &str = "BOXOFFICE_PRICE_ADULT";
pub const ENV_PRICE_CHILD: &str = "BOXOFFICE_PRICE_CHILD";
pub const ENV_PRICE_INFANT: &str = "BOXOFFICE_PRICE_INFANT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketingConfig {
    pub max_tickets_per_purchase: u32,
    /// Only categories listed here can be priced.
    pub prices: PriceCatalog,
}

impl Default for TicketingConfig {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
            prices: PriceCatalog::standard(),
        }
    }
}

impl TicketingConfig {
    /// Parse from JSON. Omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup` (a key → value source such as the environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_TICKETS) {
            config.max_tickets_per_purchase = parse_number(ENV_MAX_TICKETS, &raw)?;
        }

        let mut prices: Vec<(TicketCategory, Money)> = config.prices.entries().collect();
        for (key, category) in [
            (ENV_PRICE_ADULT, TicketCategory::Adult),
            (ENV_PRICE_CHILD, TicketCategory::Child),
            (ENV_PRICE_INFANT, TicketCategory::Infant),
        ] {
            if let Some(raw) = lookup(key) {
                prices.push((category, Money::new(parse_number(key, &raw)?)));
            }
        }
        config.prices = PriceCatalog::from_prices(prices);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tickets_per_purchase == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_tickets_per_purchase".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_number<T: core::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: core::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: format!("{raw:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_standard_rules() {
        let config = TicketingConfig::default();
        assert_eq!(config.max_tickets_per_purchase, 20);
        assert_eq!(config.prices, PriceCatalog::standard());
    }

    #[test]
    fn empty_json_keeps_defaults() {
        assert_eq!(TicketingConfig::from_json("{}").unwrap(), TicketingConfig::default());
    }

    #[test]
    fn json_overrides_limit_and_prices() {
        let config = TicketingConfig::from_json(
            r#"{ "max_tickets_per_purchase": 8, "prices": { "adult": 35, "child": 15 } }"#,
        )
        .unwrap();

        assert_eq!(config.max_tickets_per_purchase, 8);
        assert_eq!(config.prices.price_of(TicketCategory::Adult).unwrap(), Money::new(35));
        assert_eq!(config.prices.price_of(TicketCategory::Child).unwrap(), Money::new(15));
        assert!(!config.prices.contains(TicketCategory::Infant));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = TicketingConfig::from_json(r#"{ "prices": { "senior": 5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = TicketingConfig::from_json(r#"{ "max_tickets_per_purchase": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "max_tickets_per_purchase"));
    }

    #[test]
    fn lookup_without_overrides_keeps_defaults() {
        let config = TicketingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TicketingConfig::default());
    }

    #[test]
    fn lookup_overrides_individual_prices() {
        let config = TicketingConfig::from_lookup(lookup_from(&[
            (ENV_MAX_TICKETS, "30"),
            (ENV_PRICE_CHILD, " 12 "),
        ]))
        .unwrap();

        assert_eq!(config.max_tickets_per_purchase, 30);
        assert_eq!(config.prices.price_of(TicketCategory::Adult).unwrap(), Money::new(20));
        assert_eq!(config.prices.price_of(TicketCategory::Child).unwrap(), Money::new(12));
        assert_eq!(config.prices.price_of(TicketCategory::Infant).unwrap(), Money::new(0));
    }

    #[test]
    fn lookup_rejects_unparsable_values() {
        let err = TicketingConfig::from_lookup(lookup_from(&[(ENV_PRICE_ADULT, "twenty")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, .. } if key == ENV_PRICE_ADULT => {}
            other => panic!("Expected InvalidValue for {ENV_PRICE_ADULT}, got {other:?}"),
        }

        let err = TicketingConfig::from_lookup(lookup_from(&[(ENV_MAX_TICKETS, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
