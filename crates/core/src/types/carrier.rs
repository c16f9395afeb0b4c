//! Shipping carrier vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownEnumValue;

/// Carriers the marketplace recognizes for shipment and return tracking.
///
/// `Other` exists because the source schema defines it; every other token
/// is closed and an unrecognized value fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingCarrier {
    #[serde(rename = "UPS")]
    Ups,
    #[serde(rename = "FedEx")]
    FedEx,
    #[serde(rename = "USPS")]
    Usps,
    #[serde(rename = "OnTrac")]
    OnTrac,
    #[serde(rename = "DHL")]
    Dhl,
    #[serde(rename = "LaserShip")]
    LaserShip,
    #[serde(rename = "Canada Post")]
    CanadaPost,
    #[serde(rename = "Other")]
    Other,
}

impl ShippingCarrier {
    /// The wire token for this carrier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ups => "UPS",
            Self::FedEx => "FedEx",
            Self::Usps => "USPS",
            Self::OnTrac => "OnTrac",
            Self::Dhl => "DHL",
            Self::LaserShip => "LaserShip",
            Self::CanadaPost => "Canada Post",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ShippingCarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingCarrier {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPS" => Ok(Self::Ups),
            "FedEx" => Ok(Self::FedEx),
            "USPS" => Ok(Self::Usps),
            "OnTrac" => Ok(Self::OnTrac),
            "DHL" => Ok(Self::Dhl),
            "LaserShip" => Ok(Self::LaserShip),
            "Canada Post" => Ok(Self::CanadaPost),
            "Other" => Ok(Self::Other),
            _ => Err(UnknownEnumValue::new("shipping carrier", s)),
        }
    }
}
