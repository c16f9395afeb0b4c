//! Immutable lifecycle aggregates and their builders.
//!
//! Every entity is constructed through a chained-setter builder that
//! validates atomically at `build()`; a half-valid entity never exists.
//! Retrieved entities are never mutated in place - a "changed" entity is a
//! newly built value carrying the previous one's identity fields forward.

pub mod ack;
pub mod order;
pub mod order_return;
pub mod refund;
pub mod shipment;

pub use ack::{AckItem, AckItemBuilder, Acknowledgment, AcknowledgmentBuilder};
pub use order::{Order, OrderBuilder, OrderItem, OrderItemBuilder};
pub use order_return::{
    CompleteReturnRequest, CompleteReturnRequestBuilder, OrderReturn, OrderReturnBuilder,
    ReturnItem, ReturnItemBuilder,
};
pub use refund::{Refund, RefundBuilder, RefundItem, RefundItemBuilder};
pub use shipment::{Shipment, ShipmentBuilder, ShipmentItem, ShipmentItemBuilder};
