//! Error taxonomy for marketplace API access.

use thiserror::Error;

/// Errors that can occur while talking to the marketplace.
///
/// The variants separate the caller's retry decision:
/// - [`ApiError::Transport`] is a network/timeout failure and safe to retry
///   with backoff
/// - [`ApiError::RemoteRejection`] is a well-formed error response (e.g. a
///   stale status) and must not be retried blindly - the diagnostic payload
///   is preserved for operator review
/// - [`ApiError::Validation`] was caught locally before anything was sent
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed at the network level.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The marketplace rejected a well-formed request.
    #[error("remote rejection ({status}): {code}: {message}")]
    RemoteRejection {
        /// HTTP status code of the rejection.
        status: u16,
        /// Machine-readable error code, `"unknown"` when the body was not a
        /// structured error document.
        code: String,
        /// Diagnostic message from the marketplace, verbatim.
        message: String,
    },

    /// The token no longer resolves to an entity.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed wire document on a successful response.
    #[error("parse error: {0}")]
    Parse(String),

    /// A value literal inside a wire document was malformed.
    #[error(transparent)]
    Value(#[from] tradewinds_core::ParseError),

    /// A wire token fell outside a closed vocabulary.
    #[error(transparent)]
    UnknownEnum(#[from] tradewinds_core::UnknownEnumValue),

    /// A transition request failed local validation and was never sent.
    #[error(transparent)]
    Validation(#[from] tradewinds_core::ValidationError),
}

impl ApiError {
    /// Whether the caller's retry policy may reasonably re-attempt the
    /// operation.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
