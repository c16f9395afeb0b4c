//! Error types for the domain layer.
//!
//! All three errors are local signals: a [`ValidationError`] means a
//! half-built entity was rejected before it could exist, a [`ParseError`]
//! means a value-type literal was malformed, and an [`UnknownEnumValue`]
//! means a wire token fell outside a closed vocabulary. None of them are
//! ever sent to the remote system.

use thiserror::Error;

/// A required field was missing or a cross-field invariant was violated
/// while building an entity.
///
/// Raised only at `build()` time; setters never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// The offending field, named from the builder's perspective.
    pub field: &'static str,
    /// Human-readable reason.
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for a field.
    #[must_use]
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for a missing required field.
    #[must_use]
    pub fn required(field: &'static str) -> Self {
        Self::new(field, "required field is missing or empty")
    }
}

/// A value-type literal (money amount, date) could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed decimal money literal.
    #[error("invalid money amount {value:?}: {reason}")]
    Money {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Malformed ISO-8601 date literal.
    #[error("invalid date {value:?}: {reason}")]
    Date {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// A wire token did not match any member of a closed vocabulary.
///
/// Statuses, reasons, and feedback values are closed sets; an unrecognized
/// token is a data-quality signal, never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {token:?}")]
pub struct UnknownEnumValue {
    /// The vocabulary that rejected the token (e.g. `"order status"`).
    pub kind: &'static str,
    /// The unrecognized token.
    pub token: String,
}

impl UnknownEnumValue {
    /// Create an unknown-value error for a vocabulary.
    #[must_use]
    pub fn new(kind: &'static str, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }
}
