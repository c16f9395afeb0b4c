//! Authenticated HTTP transport for the marketplace merchant API.
//!
//! The transport owns URLs, auth headers, and response classification.
//! Nothing here understands entity semantics - gateways hand it a path and
//! a serializable body and get a deserialized document or an [`ApiError`]
//! back.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::config::MarketplaceConfig;
use crate::error::ApiError;

/// Authenticated marketplace HTTP client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    merchant_id: String,
}

impl ApiClient {
    /// Create a new client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the API token contains invalid header characters.
    #[must_use]
    pub fn new(config: &MarketplaceConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!(
            "Bearer {}",
            config.api_token.expose_secret()
        ))
        .expect("Invalid API token for header");
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.clone(),
                merchant_id: config.merchant_id.clone(),
            }),
        }
    }

    /// The merchant account this client is scoped to.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.inner.merchant_id
    }

    /// GET a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response is not 2xx, or
    /// the body does not deserialize.
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.resolve(path)?;
        let response = self.inner.client.get(url).send().await?;
        Self::read_json(response).await
    }

    /// PUT a JSON payload, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not 2xx.
    #[instrument(skip(self, body))]
    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.resolve(path)?;
        let response = self.inner.client.put(url).json(body).send().await?;
        Self::read_unit(response).await
    }

    /// POST a JSON payload, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not 2xx.
    #[instrument(skip(self, body))]
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.resolve(path)?;
        let response = self.inner.client.post(url).json(body).send().await?;
        Self::read_unit(response).await
    }

    fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::Parse(format!("bad request path {path:?}: {e}")))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            serde_json::from_str(&body)
                .map_err(|e| ApiError::Parse(format!("failed to parse response: {e}")))
        } else {
            Err(classify_error(status, &body))
        }
    }

    async fn read_unit(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(classify_error(status, &body))
    }
}

/// Structured error document the marketplace returns on rejections.
#[derive(Debug, serde::Deserialize)]
struct ErrorDoc {
    error: ErrorDetailDoc,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
struct ErrorDetailDoc {
    code: String,
    message: String,
}

/// Map a non-2xx response to an [`ApiError`].
///
/// 404 means the token no longer resolves; any other failure with a
/// well-formed error document is a remote rejection with its diagnostic
/// payload intact; everything else is a rejection with the raw body.
pub(crate) fn classify_error(status: StatusCode, body: &str) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound(if body.trim().is_empty() {
            "resource".to_string()
        } else {
            body.trim().to_string()
        });
    }

    match serde_json::from_str::<ErrorDoc>(body) {
        Ok(doc) => ApiError::RemoteRejection {
            status: status.as_u16(),
            code: doc.error.code,
            message: doc.error.message,
        },
        Err(_) => ApiError::RemoteRejection {
            status: status.as_u16(),
            code: "unknown".to_string(),
            message: body.trim().to_string(),
        },
    }
}
