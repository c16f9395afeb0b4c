//! Offset-aware marketplace dates.
//!
//! The marketplace wire format is ISO-8601 with an explicit UTC offset and
//! millisecond precision, e.g. `2017-06-01T09:30:00.000-07:00`. Parsing
//! keeps the original offset so a date can be shown in the zone the server
//! sent while still comparing as an absolute instant.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// The wire format emitted by [`MarketDate::to_string`].
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// An absolute instant carrying the UTC offset it was received with.
///
/// Equality and ordering compare the instant, not the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MarketDate(DateTime<FixedOffset>);

impl MarketDate {
    /// Wrap an offset-aware datetime.
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// Convert a UTC instant into a marketplace date (offset +00:00).
    #[must_use]
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant.fixed_offset())
    }

    /// The instant in UTC.
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// The instant in an arbitrary display offset.
    #[must_use]
    pub fn with_offset(&self, offset: FixedOffset) -> DateTime<FixedOffset> {
        self.0.with_timezone(&offset)
    }

    /// The instant with the offset it was parsed with.
    #[must_use]
    pub const fn as_received(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl FromStr for MarketDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s)
            .map(Self)
            .map_err(|e| ParseError::Date {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for MarketDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl Serialize for MarketDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MarketDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        let literal = "2017-06-01T09:30:00.000-07:00";
        let date: MarketDate = literal.parse().expect("parse");
        assert_eq!(date.to_string(), literal);
    }

    #[test]
    fn test_utc_conversion() {
        let date: MarketDate = "2017-06-01T09:30:00.000-07:00".parse().expect("parse");
        assert_eq!(date.to_utc().to_rfc3339(), "2017-06-01T16:30:00+00:00");
    }

    #[test]
    fn test_instant_equality_across_offsets() {
        let west: MarketDate = "2017-06-01T09:30:00.000-07:00".parse().expect("parse");
        let utc: MarketDate = "2017-06-01T16:30:00.000+00:00".parse().expect("parse");
        assert_eq!(west, utc);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let err = "June 1st 2017".parse::<MarketDate>().expect_err("should fail");
        assert!(matches!(err, ParseError::Date { .. }));
        // Missing offset is not a valid wire date.
        assert!("2017-06-01T09:30:00".parse::<MarketDate>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let date: MarketDate = "2020-01-15T00:00:00.000+05:30".parse().expect("parse");
        let json = serde_json::to_string(&date).expect("serialize");
        assert_eq!(json, "\"2020-01-15T00:00:00.000+05:30\"");
        let back: MarketDate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, date);
    }
}
