//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are plain non-negative decimal amounts; the catalog does not
//! track currency (the store carries whatever unit the operator uses).
//! Negative amounts are rejected at the serde boundary so a malformed
//! write fails validation before it reaches the store.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Error returned when constructing a [`Price`] from a negative amount.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("price must not be negative (got {0})")]
pub struct NegativePrice(pub Decimal);

/// A non-negative price amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`NegativePrice`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, NegativePrice> {
        if amount < Decimal::ZERO {
            Err(NegativePrice(amount))
        } else {
            Ok(Self(amount))
        }
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = NegativePrice;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = Decimal::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let amount = Decimal::new(-1, 2); // -0.01
        let err = Price::new(amount).unwrap_err();
        assert_eq!(err, NegativePrice(amount));
        assert_eq!(err.to_string(), "price must not be negative (got -0.01)");
    }

    #[test]
    fn test_new_accepts_zero() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<Price, _> = serde_json::from_str("\"-5\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Price::new(Decimal::new(3499, 2)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn test_display() {
        let price = Price::new(Decimal::new(1250, 2)).unwrap();
        assert_eq!(price.to_string(), "12.50");
    }
}
