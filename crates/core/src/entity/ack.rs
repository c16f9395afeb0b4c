//! Order acknowledgment aggregate.

use serde::Serialize;

use super::order::non_empty;
use crate::error::ValidationError;
use crate::status::{AckStatus, ItemAckStatus};

/// The merchant's acknowledgment of an order - the transition request that
/// moves an order from `Ready` to `Acknowledged`.
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgment {
    merchant_order_id: String,
    alt_order_id: Option<String>,
    status: AckStatus,
    items: Vec<AckItem>,
}

impl Acknowledgment {
    /// Start building an acknowledgment.
    #[must_use]
    pub fn builder() -> AcknowledgmentBuilder {
        AcknowledgmentBuilder::default()
    }

    /// The order being acknowledged.
    #[must_use]
    pub fn merchant_order_id(&self) -> &str {
        &self.merchant_order_id
    }

    /// Merchant-supplied alternate order id established by this message.
    #[must_use]
    pub fn alt_order_id(&self) -> Option<&str> {
        self.alt_order_id.as_deref()
    }

    /// Overall acknowledgment status.
    #[must_use]
    pub const fn status(&self) -> AckStatus {
        self.status
    }

    /// Per-item acknowledgments.
    #[must_use]
    pub fn items(&self) -> &[AckItem] {
        &self.items
    }
}

/// Chained-setter builder for [`Acknowledgment`].
#[derive(Debug, Default)]
pub struct AcknowledgmentBuilder {
    merchant_order_id: Option<String>,
    alt_order_id: Option<String>,
    status: Option<AckStatus>,
    items: Vec<AckItem>,
}

impl AcknowledgmentBuilder {
    /// Merchant order id (required).
    #[must_use]
    pub fn merchant_order_id(mut self, value: impl Into<String>) -> Self {
        self.merchant_order_id = Some(value.into());
        self
    }

    /// Alternate order id to establish (optional).
    #[must_use]
    pub fn alt_order_id(mut self, value: impl Into<String>) -> Self {
        self.alt_order_id = Some(value.into());
        self
    }

    /// Overall status (required).
    #[must_use]
    pub const fn status(mut self, value: AckStatus) -> Self {
        self.status = Some(value);
        self
    }

    /// Append a per-item acknowledgment.
    #[must_use]
    pub fn item(mut self, value: AckItem) -> Self {
        self.items.push(value);
        self
    }

    /// Replace the per-item acknowledgments.
    #[must_use]
    pub fn items(mut self, value: Vec<AckItem>) -> Self {
        self.items = value;
        self
    }

    /// Validate and construct the acknowledgment.
    ///
    /// Cross-field rule: if every item is unfulfillable the overall status
    /// must be [`AckStatus::Rejected`]. Partial acceptance (a mix of
    /// fulfillable and unfulfillable items under `Accepted`) is allowed.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn build(self) -> Result<Acknowledgment, ValidationError> {
        let merchant_order_id = non_empty(self.merchant_order_id, "merchant_order_id")?;
        let status = self
            .status
            .ok_or_else(|| ValidationError::required("status"))?;

        if self.items.is_empty() {
            return Err(ValidationError::new(
                "items",
                "acknowledgment must cover at least one item",
            ));
        }

        let any_fulfillable = self
            .items
            .iter()
            .any(|i| i.status() == ItemAckStatus::Fulfillable);
        if !any_fulfillable && status == AckStatus::Accepted {
            return Err(ValidationError::new(
                "status",
                "cannot accept an order with no fulfillable items",
            ));
        }

        Ok(Acknowledgment {
            merchant_order_id,
            alt_order_id: self.alt_order_id.filter(|s| !s.is_empty()),
            status,
            items: self.items,
        })
    }
}

/// One line item's acknowledgment.
#[derive(Debug, Clone, Serialize)]
pub struct AckItem {
    order_item_id: String,
    merchant_sku: String,
    quantity_ordered: u32,
    quantity_acknowledged: u32,
    status: ItemAckStatus,
}

impl AckItem {
    /// Start building an ack item. Prefer deriving one from an order item
    /// via [`convert::ack_item`](crate::convert::ack_item).
    #[must_use]
    pub fn builder() -> AckItemBuilder {
        AckItemBuilder::default()
    }

    /// The order line item being acknowledged.
    #[must_use]
    pub fn order_item_id(&self) -> &str {
        &self.order_item_id
    }

    /// Merchant sku.
    #[must_use]
    pub fn merchant_sku(&self) -> &str {
        &self.merchant_sku
    }

    /// Quantity the customer ordered.
    #[must_use]
    pub const fn quantity_ordered(&self) -> u32 {
        self.quantity_ordered
    }

    /// Quantity the merchant commits to fulfill.
    #[must_use]
    pub const fn quantity_acknowledged(&self) -> u32 {
        self.quantity_acknowledged
    }

    /// Per-item fulfillability.
    #[must_use]
    pub const fn status(&self) -> ItemAckStatus {
        self.status
    }
}

/// Chained-setter builder for [`AckItem`].
#[derive(Debug, Default)]
pub struct AckItemBuilder {
    order_item_id: Option<String>,
    merchant_sku: Option<String>,
    quantity_ordered: Option<u32>,
    quantity_acknowledged: Option<u32>,
    status: Option<ItemAckStatus>,
}

impl AckItemBuilder {
    /// Order line-item id (required).
    #[must_use]
    pub fn order_item_id(mut self, value: impl Into<String>) -> Self {
        self.order_item_id = Some(value.into());
        self
    }

    /// Merchant sku (required).
    #[must_use]
    pub fn merchant_sku(mut self, value: impl Into<String>) -> Self {
        self.merchant_sku = Some(value.into());
        self
    }

    /// Quantity ordered (required).
    #[must_use]
    pub const fn quantity_ordered(mut self, value: u32) -> Self {
        self.quantity_ordered = Some(value);
        self
    }

    /// Quantity acknowledged (required, at most the quantity ordered).
    #[must_use]
    pub const fn quantity_acknowledged(mut self, value: u32) -> Self {
        self.quantity_acknowledged = Some(value);
        self
    }

    /// Per-item status (required).
    #[must_use]
    pub const fn status(mut self, value: ItemAckStatus) -> Self {
        self.status = Some(value);
        self
    }

    /// Validate and construct the item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn build(self) -> Result<AckItem, ValidationError> {
        let order_item_id = non_empty(self.order_item_id, "order_item_id")?;
        let merchant_sku = non_empty(self.merchant_sku, "merchant_sku")?;
        let quantity_ordered = self
            .quantity_ordered
            .ok_or_else(|| ValidationError::required("quantity_ordered"))?;
        let quantity_acknowledged = self
            .quantity_acknowledged
            .ok_or_else(|| ValidationError::required("quantity_acknowledged"))?;
        let status = self
            .status
            .ok_or_else(|| ValidationError::required("status"))?;

        if quantity_acknowledged > quantity_ordered {
            return Err(ValidationError::new(
                "quantity_acknowledged",
                format!("must not exceed quantity ordered ({quantity_ordered})"),
            ));
        }

        Ok(AckItem {
            order_item_id,
            merchant_sku,
            quantity_ordered,
            quantity_acknowledged,
            status,
        })
    }
}
