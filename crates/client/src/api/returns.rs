//! Return registry and completion over the live API.

use tracing::instrument;
use tradewinds_core::entity::{CompleteReturnRequest, OrderReturn};
use tradewinds_core::status::ReturnStatus;

use super::{MarketplaceApi, ReturnGateway};
use crate::error::ApiError;
use crate::wire::{ReturnDoc, ReturnUrlsDoc, complete_return_to_doc, return_from_doc, token_from_url};

impl MarketplaceApi {
    /// Return authorization ids currently in `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a poll URL is malformed.
    #[instrument(skip(self))]
    pub async fn poll_returns(&self, status: ReturnStatus) -> Result<Vec<String>, ApiError> {
        let doc: ReturnUrlsDoc = self
            .client()
            .get_json(&format!("returns/{}", status.as_str()))
            .await?;
        doc.return_urls.iter().map(|url| token_from_url(url)).collect()
    }

    /// Full detail for one return authorization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the detail document is
    /// malformed.
    #[instrument(skip(self))]
    pub async fn return_detail(&self, token: &str) -> Result<OrderReturn, ApiError> {
        let doc: ReturnDoc = self
            .client()
            .get_json(&format!("returns/detail/{token}"))
            .await?;
        return_from_doc(token, doc)
    }

    /// Submit a completion request for a return.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the marketplace rejects the
    /// transition.
    #[instrument(skip(self, request))]
    pub async fn complete_return(
        &self,
        token: &str,
        request: &CompleteReturnRequest,
    ) -> Result<(), ApiError> {
        self.client()
            .put_json(
                &format!("returns/{token}/complete"),
                &complete_return_to_doc(request),
            )
            .await
    }
}

impl ReturnGateway for MarketplaceApi {
    async fn poll(&self, status: ReturnStatus) -> Result<Vec<String>, ApiError> {
        self.poll_returns(status).await
    }

    async fn detail(&self, token: &str) -> Result<OrderReturn, ApiError> {
        self.return_detail(token).await
    }

    async fn complete(
        &self,
        token: &str,
        request: &CompleteReturnRequest,
    ) -> Result<(), ApiError> {
        self.complete_return(token, request).await
    }
}
