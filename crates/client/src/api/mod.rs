//! Status-registry gateways.
//!
//! For each entity kind the controller needs exactly three operations:
//! poll tokens by status, retrieve detail for one token, and submit a
//! transition request. The traits capture that surface so the controller
//! can run against in-memory fakes in tests; [`MarketplaceApi`] is the
//! live implementation over [`ApiClient`](crate::transport::ApiClient).
//!
//! Registries never cache: every poll is a fresh query, and the remote
//! system stays the source of truth for status.

#![allow(async_fn_in_trait)]

mod orders;
mod refunds;
mod returns;

use tradewinds_core::entity::{
    Acknowledgment, CompleteReturnRequest, Order, OrderReturn, Refund, Shipment,
};
use tradewinds_core::status::{OrderStatus, RefundStatus, ReturnStatus};

use crate::config::MarketplaceConfig;
use crate::error::ApiError;
use crate::transport::ApiClient;

/// Remote-facing surface for orders.
pub trait OrderGateway: Send + Sync {
    /// Tokens of orders currently in `status`. Fresh query per call.
    async fn poll(&self, status: OrderStatus) -> Result<Vec<String>, ApiError>;

    /// Full detail for one order token.
    async fn detail(&self, token: &str) -> Result<Order, ApiError>;

    /// Submit an acknowledgment transition.
    async fn acknowledge(&self, token: &str, ack: &Acknowledgment) -> Result<(), ApiError>;

    /// Submit a shipment transition.
    async fn ship(&self, token: &str, shipment: &Shipment) -> Result<(), ApiError>;
}

/// Remote-facing surface for returns.
pub trait ReturnGateway: Send + Sync {
    /// Tokens of returns currently in `status`. Fresh query per call.
    async fn poll(&self, status: ReturnStatus) -> Result<Vec<String>, ApiError>;

    /// Full detail for one return authorization id.
    async fn detail(&self, token: &str) -> Result<OrderReturn, ApiError>;

    /// Submit a completion transition.
    async fn complete(
        &self,
        token: &str,
        request: &CompleteReturnRequest,
    ) -> Result<(), ApiError>;
}

/// Remote-facing surface for refunds.
pub trait RefundGateway: Send + Sync {
    /// Tokens of refunds currently in `status`. Fresh query per call.
    async fn poll(&self, status: RefundStatus) -> Result<Vec<String>, ApiError>;

    /// Full detail for one refund id.
    async fn detail(&self, token: &str) -> Result<Refund, ApiError>;

    /// Create a refund for an order.
    async fn create(&self, merchant_order_id: &str, refund: &Refund) -> Result<(), ApiError>;
}

/// Live marketplace API over the authenticated transport.
///
/// Cheap to clone; one value can serve as all three gateways.
#[derive(Clone)]
pub struct MarketplaceApi {
    client: ApiClient,
}

impl MarketplaceApi {
    /// Create a new API from configuration.
    #[must_use]
    pub fn new(config: &MarketplaceConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    /// Wrap an existing transport client.
    #[must_use]
    pub const fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub(crate) const fn client(&self) -> &ApiClient {
        &self.client
    }
}
