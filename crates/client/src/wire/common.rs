//! Shared wire fragments.

use serde::{Deserialize, Serialize};
use tradewinds_core::ValidationError;
use tradewinds_core::types::Address;

use crate::error::ApiError;

/// Postal address as the marketplace spells it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressDoc {
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Parse an inbound address document.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the document violates address rules.
pub fn address_from_doc(doc: &AddressDoc) -> Result<Address, ApiError> {
    let mut builder = Address::builder()
        .address1(&doc.address1)
        .city(&doc.city)
        .state(&doc.state)
        .zip(&doc.zip_code);
    if let Some(address2) = &doc.address2 {
        builder = builder.address2(address2);
    }
    builder.build().map_err(doc_invalid("address"))
}

/// Render an address for an outbound document.
#[must_use]
pub fn address_to_doc(address: &Address) -> AddressDoc {
    AddressDoc {
        address1: address.address1().to_string(),
        address2: address.address2().map(ToOwned::to_owned),
        city: address.city().to_string(),
        state: address.state().to_string(),
        zip_code: address.zip().to_string(),
    }
}

/// Extract the trailing token from a poll URL
/// (`"https://.../orders/ready/ab12cd"` or `"/orders/ready/ab12cd"`).
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the URL has no token segment.
pub fn token_from_url(url: &str) -> Result<String, ApiError> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .ok_or_else(|| ApiError::Parse(format!("poll url has no token segment: {url:?}")))
}

/// Attribute a builder failure on an inbound document to the document.
pub(crate) fn doc_invalid(what: &'static str) -> impl Fn(ValidationError) -> ApiError {
    move |e| ApiError::Parse(format!("invalid {what} in response document: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_round_trip() {
        let doc = AddressDoc {
            address1: "500 Harbor Blvd".to_string(),
            address2: None,
            city: "Pine Grove".to_string(),
            state: "CA".to_string(),
            zip_code: "94025".to_string(),
        };
        let address = address_from_doc(&doc).expect("parse");
        let back = address_to_doc(&address);
        assert_eq!(back.address1, doc.address1);
        assert_eq!(back.zip_code, doc.zip_code);
    }

    #[test]
    fn test_bad_state_becomes_parse_error() {
        let doc = AddressDoc {
            address1: "500 Harbor Blvd".to_string(),
            address2: None,
            city: "Pine Grove".to_string(),
            state: "CALIFORNIA".to_string(),
            zip_code: "94025".to_string(),
        };
        let err = address_from_doc(&doc).expect_err("should fail");
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_token_from_url() {
        assert_eq!(
            token_from_url("https://merchant-api.example.com/orders/ready/ab12cd").expect("token"),
            "ab12cd"
        );
        assert_eq!(token_from_url("/returns/created/ra-100/").expect("token"), "ra-100");
        assert!(token_from_url("").is_err());
    }
}
