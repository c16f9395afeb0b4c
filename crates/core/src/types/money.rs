//! Exact-decimal money representation.
//!
//! Monetary fields use base-10 decimal arithmetic, never binary floating
//! point, so currency values round-trip through the wire format without
//! drift. The wire representation is a plain decimal string ("44.99").

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A monetary amount with exact decimal semantics.
///
/// Parsing preserves the scale of the input, so `"44.99"`, `"0.00"` and
/// `"1234.50"` all serialize back to the identical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl Money {
    /// A zero amount with two decimal places ("0.00").
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::new(0, 2))
    }

    /// Create from an already-parsed decimal.
    #[must_use]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Add two amounts, failing on overflow.
    #[must_use]
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract an amount, failing on overflow.
    #[must_use]
    pub fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self).map_err(|e| ParseError::Money {
            value: s.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_scale() {
        for literal in ["44.99", "0.00", "1234.50", "7", "0.005"] {
            let money: Money = literal.parse().expect("parse");
            assert_eq!(money.to_string(), literal);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let money: Money = "19.99".parse().expect("parse");
        let json = serde_json::to_string(&money).expect("serialize");
        assert_eq!(json, "\"19.99\"");
        let back: Money = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, money);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let err = "12.34.56".parse::<Money>().expect_err("should fail");
        assert!(matches!(err, ParseError::Money { .. }));
        assert!("".parse::<Money>().is_err());
        assert!("$5.00".parse::<Money>().is_err());
    }

    #[test]
    fn test_checked_arithmetic() {
        let a: Money = "10.50".parse().expect("parse");
        let b: Money = "4.25".parse().expect("parse");
        assert_eq!(a.checked_add(b).expect("add").to_string(), "14.75");
        assert_eq!(a.checked_sub(b).expect("sub").to_string(), "6.25");
    }

    #[test]
    fn test_ordering_and_sign() {
        let small: Money = "1.00".parse().expect("parse");
        let big: Money = "2.00".parse().expect("parse");
        assert!(small < big);
        assert!(!Money::zero().is_negative());
        assert!("-0.01".parse::<Money>().expect("parse").is_negative());
    }
}
