//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TRADEWINDS_API_URL` - Base URL of the marketplace merchant API
//! - `TRADEWINDS_MERCHANT_ID` - Merchant account identifier
//! - `TRADEWINDS_API_TOKEN` - Bearer token for the merchant API
//!
//! ## Optional
//! - `TRADEWINDS_TIMEOUT_SECS` - Per-request timeout (default: 30)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Placeholder patterns that must never appear in a real token.
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Marketplace API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct MarketplaceConfig {
    /// Base URL of the merchant API (e.g. `https://merchant-api.example.com/api/`).
    pub api_url: Url,
    /// Merchant account identifier.
    pub merchant_id: String,
    /// Bearer token (server-side only).
    pub api_token: SecretString,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for MarketplaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketplaceConfig")
            .field("api_url", &self.api_url.as_str())
            .field("merchant_id", &self.merchant_id)
            .field("api_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MarketplaceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first missing or invalid
    /// variable. Obvious placeholder tokens are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = required("TRADEWINDS_API_URL")?;
        let api_url = Url::parse(&api_url).map_err(|e| {
            ConfigError::InvalidEnvVar("TRADEWINDS_API_URL".to_string(), e.to_string())
        })?;

        let merchant_id = required("TRADEWINDS_MERCHANT_ID")?;
        let api_token = required("TRADEWINDS_API_TOKEN")?;
        reject_placeholder("TRADEWINDS_API_TOKEN", &api_token)?;

        let timeout = match std::env::var("TRADEWINDS_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar(
                    "TRADEWINDS_TIMEOUT_SECS".to_string(),
                    format!("not a number of seconds: {raw}"),
                )
            })?),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            merchant_id,
            api_token: api_token.into(),
            timeout,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn reject_placeholder(name: &str, value: &str) -> Result<(), ConfigError> {
    let lowered = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lowered.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                name.to_string(),
                format!("looks like a placeholder ({pattern})"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_token_rejected() {
        let err = reject_placeholder("TRADEWINDS_API_TOKEN", "your-token-here")
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::InsecureSecret(name, _) if name == "TRADEWINDS_API_TOKEN"));
    }

    #[test]
    fn test_real_looking_token_accepted() {
        assert!(reject_placeholder("TRADEWINDS_API_TOKEN", "tw_9f8a2c44d1").is_ok());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = MarketplaceConfig {
            api_url: Url::parse("https://merchant-api.example.com/api/").expect("url"),
            merchant_id: "m-123".to_string(),
            api_token: "tw_9f8a2c44d1".into(),
            timeout: Duration::from_secs(30),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("tw_9f8a2c44d1"));
    }
}
