//! Builder-validated postal addresses.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated postal address.
///
/// Constructed only through [`AddressBuilder`]; the marketplace requires a
/// 2-letter state code and a zip code of at most 5 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    address1: String,
    address2: Option<String>,
    city: String,
    state: String,
    zip: String,
}

impl Address {
    /// Start building an address.
    #[must_use]
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// Street address, first line.
    #[must_use]
    pub fn address1(&self) -> &str {
        &self.address1
    }

    /// Street address, second line.
    #[must_use]
    pub fn address2(&self) -> Option<&str> {
        self.address2.as_deref()
    }

    /// City.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// 2-letter state code.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Zip code (at most 5 characters).
    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }
}

/// Chained-setter builder for [`Address`].
#[derive(Debug, Default, Clone)]
pub struct AddressBuilder {
    address1: Option<String>,
    address2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
}

impl AddressBuilder {
    /// Street address, first line (required).
    #[must_use]
    pub fn address1(mut self, value: impl Into<String>) -> Self {
        self.address1 = Some(value.into());
        self
    }

    /// Street address, second line (optional).
    #[must_use]
    pub fn address2(mut self, value: impl Into<String>) -> Self {
        self.address2 = Some(value.into());
        self
    }

    /// City (required).
    #[must_use]
    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    /// State code (required, exactly 2 characters).
    #[must_use]
    pub fn state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }

    /// Zip code (required, at most 5 characters).
    #[must_use]
    pub fn zip(mut self, value: impl Into<String>) -> Self {
        self.zip = Some(value.into());
        self
    }

    /// Validate all fields and construct the address.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn build(self) -> Result<Address, ValidationError> {
        let address1 = required(self.address1, "address1")?;
        let city = required(self.city, "city")?;
        let state = required(self.state, "state")?;
        let zip = required(self.zip, "zip")?;

        if state.chars().count() != 2 {
            return Err(ValidationError::new("state", "must be exactly 2 characters"));
        }
        if zip.chars().count() > 5 {
            return Err(ValidationError::new("zip", "must be at most 5 characters"));
        }

        Ok(Address {
            address1,
            address2: self.address2.filter(|s| !s.is_empty()),
            city,
            state,
            zip,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::required(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AddressBuilder {
        Address::builder()
            .address1("500 Harbor Blvd")
            .city("Pine Grove")
            .state("CA")
            .zip("94025")
    }

    #[test]
    fn test_valid_address_builds() {
        let address = base().address2("Suite 210").build().expect("build");
        assert_eq!(address.state(), "CA");
        assert_eq!(address.zip(), "94025");
        assert_eq!(address.address2(), Some("Suite 210"));
    }

    #[test]
    fn test_three_character_state_rejected() {
        let err = base().state("CAL").build().expect_err("should fail");
        assert_eq!(err.field, "state");
    }

    #[test]
    fn test_six_character_zip_rejected() {
        let err = base().zip("940251").build().expect_err("should fail");
        assert_eq!(err.field, "zip");
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let err = Address::builder()
            .address1("500 Harbor Blvd")
            .state("CA")
            .zip("94025")
            .build()
            .expect_err("should fail");
        assert_eq!(err.field, "city");
    }

    #[test]
    fn test_blank_field_rejected() {
        let err = base().address1("   ").build().expect_err("should fail");
        assert_eq!(err.field, "address1");
    }
}
