//! Order registry and transitions over the live API.

use tracing::instrument;
use tradewinds_core::entity::{Acknowledgment, Order, Shipment};
use tradewinds_core::status::OrderStatus;

use super::{MarketplaceApi, OrderGateway};
use crate::error::ApiError;
use crate::wire::{OrderDoc, OrderUrlsDoc, ack_to_doc, order_from_doc, shipment_to_doc, token_from_url};

impl MarketplaceApi {
    /// Tokens of all orders currently in `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a poll URL is malformed.
    #[instrument(skip(self))]
    pub async fn poll_orders(&self, status: OrderStatus) -> Result<Vec<String>, ApiError> {
        let doc: OrderUrlsDoc = self
            .client()
            .get_json(&format!("orders/{}", status.as_str()))
            .await?;
        doc.order_urls.iter().map(|url| token_from_url(url)).collect()
    }

    /// Full detail for one order token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the detail document is
    /// malformed.
    #[instrument(skip(self))]
    pub async fn order_detail(&self, token: &str) -> Result<Order, ApiError> {
        let doc: OrderDoc = self
            .client()
            .get_json(&format!("orders/detail/{token}"))
            .await?;
        order_from_doc(token, doc)
    }

    /// Submit an acknowledgment for an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the marketplace rejects the
    /// transition.
    #[instrument(skip(self, ack))]
    pub async fn acknowledge_order(
        &self,
        token: &str,
        ack: &Acknowledgment,
    ) -> Result<(), ApiError> {
        self.client()
            .put_json(&format!("orders/{token}/acknowledge"), &ack_to_doc(ack))
            .await
    }

    /// Submit a shipment for an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the marketplace rejects the
    /// transition.
    #[instrument(skip(self, shipment))]
    pub async fn ship_order(&self, token: &str, shipment: &Shipment) -> Result<(), ApiError> {
        self.client()
            .put_json(&format!("orders/{token}/shipped"), &shipment_to_doc(shipment))
            .await
    }
}

impl OrderGateway for MarketplaceApi {
    async fn poll(&self, status: OrderStatus) -> Result<Vec<String>, ApiError> {
        self.poll_orders(status).await
    }

    async fn detail(&self, token: &str) -> Result<Order, ApiError> {
        self.order_detail(token).await
    }

    async fn acknowledge(&self, token: &str, ack: &Acknowledgment) -> Result<(), ApiError> {
        self.acknowledge_order(token, ack).await
    }

    async fn ship(&self, token: &str, shipment: &Shipment) -> Result<(), ApiError> {
        self.ship_order(token, shipment).await
    }
}
