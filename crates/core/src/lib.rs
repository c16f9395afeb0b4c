//! Tradewinds Core - Marketplace order lifecycle domain model.
//!
//! This crate provides the pure domain layer shared by every Tradewinds
//! component:
//! - value types (exact-decimal money, offset-aware dates, addresses)
//! - closed status/reason vocabularies for each lifecycle entity
//! - builder-validated immutable aggregates (orders, acknowledgments,
//!   shipments, returns, refunds)
//! - the item-conversion pipeline that derives one entity's line items
//!   from another's
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no wire-format knowledge. Field naming on the marketplace API
//! lives in `tradewinds-client`; this crate only guarantees the semantic
//! contracts (quantity conservation, required fields, status gating).
//!
//! # Modules
//!
//! - [`types`] - Money, dates, addresses, carriers
//! - [`status`] - Lifecycle status and reason vocabularies
//! - [`entity`] - Immutable aggregates and their builders
//! - [`convert`] - Cross-entity item conversion pipeline
//! - [`ids`] - Injected alternate-id generation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod convert;
pub mod entity;
pub mod error;
pub mod ids;
pub mod status;
pub mod types;

pub use error::{ParseError, UnknownEnumValue, ValidationError};
