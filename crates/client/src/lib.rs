//! Tradewinds Client - Marketplace API access and lifecycle orchestration.
//!
//! Everything remote-facing lives here: the authenticated transport, the
//! per-entity wire codecs, the status-registry gateways, and the lifecycle
//! controller that walks orders, returns, and refunds through their state
//! machines.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`transport`] - Authenticated HTTP wrapper over `reqwest`
//! - [`wire`] - Per-entity wire documents and codecs
//! - [`api`] - Gateway traits and the live marketplace implementation
//! - [`controller`] - Batch lifecycle controller
//!
//! # Example
//!
//! ```rust,no_run
//! use tradewinds_client::api::MarketplaceApi;
//! use tradewinds_client::config::MarketplaceConfig;
//! use tradewinds_client::controller::LifecycleController;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MarketplaceConfig::from_env()?;
//! let api = MarketplaceApi::new(&config);
//! let controller = LifecycleController::new(api.clone(), api.clone(), api);
//! let report = controller.acknowledge_ready_orders().await?;
//! for failure in report.failures() {
//!     eprintln!("{failure}");
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod transport;
pub mod wire;

pub use error::ApiError;
