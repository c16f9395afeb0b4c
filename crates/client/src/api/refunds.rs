//! Refund registry and creation over the live API.

use tracing::instrument;
use tradewinds_core::entity::Refund;
use tradewinds_core::status::RefundStatus;

use super::{MarketplaceApi, RefundGateway};
use crate::error::ApiError;
use crate::wire::{RefundDoc, RefundUrlsDoc, refund_from_doc, refund_to_doc, token_from_url};

impl MarketplaceApi {
    /// Refund ids currently in `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a poll URL is malformed.
    #[instrument(skip(self))]
    pub async fn poll_refunds(&self, status: RefundStatus) -> Result<Vec<String>, ApiError> {
        let doc: RefundUrlsDoc = self
            .client()
            .get_json(&format!("refunds/{}", status.as_str()))
            .await?;
        doc.refund_urls.iter().map(|url| token_from_url(url)).collect()
    }

    /// Full detail for one refund.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the detail document is
    /// malformed.
    #[instrument(skip(self))]
    pub async fn refund_detail(&self, token: &str) -> Result<Refund, ApiError> {
        let doc: RefundDoc = self
            .client()
            .get_json(&format!("refunds/detail/{token}"))
            .await?;
        refund_from_doc(token, doc)
    }

    /// Create a merchant-initiated refund against an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the marketplace rejects the
    /// refund.
    #[instrument(skip(self, refund))]
    pub async fn create_refund(
        &self,
        merchant_order_id: &str,
        refund: &Refund,
    ) -> Result<(), ApiError> {
        self.client()
            .post_json(&format!("refunds/{merchant_order_id}"), &refund_to_doc(refund))
            .await
    }
}

impl RefundGateway for MarketplaceApi {
    async fn poll(&self, status: RefundStatus) -> Result<Vec<String>, ApiError> {
        self.poll_refunds(status).await
    }

    async fn detail(&self, token: &str) -> Result<Refund, ApiError> {
        self.refund_detail(token).await
    }

    async fn create(&self, merchant_order_id: &str, refund: &Refund) -> Result<(), ApiError> {
        self.create_refund(merchant_order_id, refund).await
    }
}
