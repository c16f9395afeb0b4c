//! Cross-entity item conversion pipeline.
//!
//! Every place one entity's line items are derived from another's goes
//! through this module, so the quantity rules live in exactly one spot:
//!
//! - conversions with a ship/cancel split (order item -> shipment item)
//!   default to "ship everything" and reject, at `build()`, any
//!   redistribution where shipped + cancelled stops summing to the ordered
//!   quantity
//! - conversions without a split (return item, refund item) enforce
//!   `target quantity <= source quantity`
//!
//! Each function returns a pre-filled builder: identity (sku, line-item id)
//! and quantity context are carried over, while stage-specific fields
//! (feedback, refund reason, RMA number) stay open as override points.

use crate::entity::ack::{AckItemBuilder, AcknowledgmentBuilder};
use crate::entity::order::{Order, OrderItem};
use crate::entity::order_return::ReturnItemBuilder;
use crate::entity::refund::{RefundBuilder, RefundItemBuilder};
use crate::entity::shipment::{ShipmentBuilder, ShipmentItemBuilder};
use crate::status::{AckStatus, ItemAckStatus};

/// Derive an acknowledgment item from an order item.
///
/// Defaults to fully acknowledged and fulfillable; callers lower the
/// acknowledged quantity or flip the status for short stock.
#[must_use]
pub fn ack_item(source: &OrderItem) -> AckItemBuilder {
    AckItemBuilder::default()
        .order_item_id(source.order_item_id())
        .merchant_sku(source.merchant_sku())
        .quantity_ordered(source.quantity_ordered())
        .quantity_acknowledged(source.quantity_ordered())
        .status(ItemAckStatus::Fulfillable)
}

/// Derive a shipment item from an order item.
///
/// Default split is `shipped = ordered, cancelled = 0`; use
/// [`ShipmentItemBuilder::split`] or
/// [`ShipmentItemBuilder::cancel_all`] to redistribute. The builder rejects
/// any split that does not sum to the ordered quantity.
#[must_use]
pub fn shipment_item(source: &OrderItem) -> ShipmentItemBuilder {
    ShipmentItemBuilder::default()
        .order_item_id(source.order_item_id())
        .merchant_sku(source.merchant_sku())
        .quantity_ordered(source.quantity_ordered())
        .split(source.quantity_ordered(), 0)
}

/// Derive a return item from an order item.
///
/// Defaults to returning the full ordered quantity; the builder rejects a
/// quantity above it. Feedback and notes are override points.
#[must_use]
pub fn return_item(source: &OrderItem) -> ReturnItemBuilder {
    ReturnItemBuilder::default()
        .order_item_id(source.order_item_id())
        .merchant_sku(source.merchant_sku())
        .quantity_ordered(source.quantity_ordered())
        .quantity(source.quantity_ordered())
}

/// Derive a refund item from an order item.
///
/// Carries identity, quantity context, and pricing (the line total as the
/// default refund amount). The refund reason is an override point and
/// remains required at `build()`.
#[must_use]
pub fn refund_item(source: &OrderItem) -> RefundItemBuilder {
    let builder = RefundItemBuilder::default()
        .order_item_id(source.order_item_id())
        .merchant_sku(source.merchant_sku())
        .quantity_ordered(source.quantity_ordered())
        .quantity(source.quantity_ordered());

    let line_total = source
        .unit_price()
        .amount()
        .checked_mul(source.quantity_ordered().into());
    match line_total {
        Some(total) => builder.refund_amount(crate::types::Money::from_decimal(total)),
        None => builder,
    }
}

/// Pre-fill an acknowledgment for a whole order: accepted overall, every
/// item fulfillable at its ordered quantity.
#[must_use]
pub fn acknowledgment_for(order: &Order) -> AcknowledgmentBuilder {
    let mut builder = AcknowledgmentBuilder::default()
        .merchant_order_id(order.merchant_order_id())
        .status(AckStatus::Accepted);
    if let Some(alt) = order.alt_order_id() {
        builder = builder.alt_order_id(alt);
    }
    for item in order.items() {
        // Prefilled items always build: full acknowledgment, fulfillable.
        if let Ok(ack) = ack_item(item).build() {
            builder = builder.item(ack);
        }
    }
    builder
}

/// Pre-fill a shipment for a whole order: every item fully shipped, the
/// order's requested carrier carried over. Tracking, dates, and any
/// ship/cancel redistribution are up to the caller.
#[must_use]
pub fn shipment_for(order: &Order) -> ShipmentBuilder {
    let mut builder = ShipmentBuilder::default();
    if let Some(carrier) = order.requested_carrier() {
        builder = builder.carrier(carrier);
    }
    for item in order.items() {
        if let Ok(shipped) = shipment_item(item).build() {
            builder = builder.item(shipped);
        }
    }
    builder
}

/// Pre-fill a refund for a whole order. Items still need a refund reason,
/// so the returned builder's items are *not* yet populated; use
/// [`refund_item`] per line and attach them.
#[must_use]
pub fn refund_for(order: &Order) -> RefundBuilder {
    RefundBuilder::default().merchant_order_id(order.merchant_order_id())
}
