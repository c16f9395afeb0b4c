//! Shipment aggregate and the quantity-conservation invariant.

use serde::Serialize;

use super::order::non_empty;
use crate::error::ValidationError;
use crate::types::{Address, MarketDate, ShippingCarrier};

/// A shipment (or cancellation) of order items.
///
/// Two invariants are enforced at build time:
/// - every item's `quantity_shipped + quantity_cancelled` equals the
///   quantity ordered for that line (quantity conservation)
/// - a shipment that ships nothing (every item cancelled) must carry an
///   alternate shipment id, which the marketplace requires for cancel-only
///   shipments
#[derive(Debug, Clone, Serialize)]
pub struct Shipment {
    shipment_id: Option<String>,
    alt_shipment_id: Option<String>,
    carrier: Option<ShippingCarrier>,
    tracking_number: Option<String>,
    ship_date: Option<MarketDate>,
    expected_delivery_date: Option<MarketDate>,
    ship_from: Option<Address>,
    return_to: Option<Address>,
    rma_number: Option<String>,
    items: Vec<ShipmentItem>,
}

impl Shipment {
    /// Start building a shipment.
    #[must_use]
    pub fn builder() -> ShipmentBuilder {
        ShipmentBuilder::default()
    }

    /// Marketplace-assigned shipment id (absent on outbound requests).
    #[must_use]
    pub fn shipment_id(&self) -> Option<&str> {
        self.shipment_id.as_deref()
    }

    /// Merchant-supplied alternate shipment id.
    #[must_use]
    pub fn alt_shipment_id(&self) -> Option<&str> {
        self.alt_shipment_id.as_deref()
    }

    /// Carrier handling the shipment.
    #[must_use]
    pub const fn carrier(&self) -> Option<ShippingCarrier> {
        self.carrier
    }

    /// Carrier tracking number.
    #[must_use]
    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }

    /// When the shipment left the merchant.
    #[must_use]
    pub const fn ship_date(&self) -> Option<MarketDate> {
        self.ship_date
    }

    /// Expected delivery date.
    #[must_use]
    pub const fn expected_delivery_date(&self) -> Option<MarketDate> {
        self.expected_delivery_date
    }

    /// Ship-from location.
    #[must_use]
    pub const fn ship_from(&self) -> Option<&Address> {
        self.ship_from.as_ref()
    }

    /// Return-to address for this shipment.
    #[must_use]
    pub const fn return_to(&self) -> Option<&Address> {
        self.return_to.as_ref()
    }

    /// RMA number customers should use when returning this shipment.
    #[must_use]
    pub fn rma_number(&self) -> Option<&str> {
        self.rma_number.as_deref()
    }

    /// Shipped/cancelled line items.
    #[must_use]
    pub fn items(&self) -> &[ShipmentItem] {
        &self.items
    }

    /// Whether every item in the shipment was cancelled.
    #[must_use]
    pub fn is_cancel_only(&self) -> bool {
        self.items.iter().all(|i| i.quantity_shipped() == 0)
    }
}

/// Chained-setter builder for [`Shipment`].
#[derive(Debug, Default)]
pub struct ShipmentBuilder {
    shipment_id: Option<String>,
    alt_shipment_id: Option<String>,
    carrier: Option<ShippingCarrier>,
    tracking_number: Option<String>,
    ship_date: Option<MarketDate>,
    expected_delivery_date: Option<MarketDate>,
    ship_from: Option<Address>,
    return_to: Option<Address>,
    rma_number: Option<String>,
    items: Vec<ShipmentItem>,
}

impl ShipmentBuilder {
    /// Marketplace shipment id (set when parsing a retrieved shipment).
    #[must_use]
    pub fn shipment_id(mut self, value: impl Into<String>) -> Self {
        self.shipment_id = Some(value.into());
        self
    }

    /// Alternate shipment id (required for cancel-only shipments).
    #[must_use]
    pub fn alt_shipment_id(mut self, value: impl Into<String>) -> Self {
        self.alt_shipment_id = Some(value.into());
        self
    }

    /// Carrier (required when anything ships).
    #[must_use]
    pub const fn carrier(mut self, value: ShippingCarrier) -> Self {
        self.carrier = Some(value);
        self
    }

    /// Tracking number (required when anything ships).
    #[must_use]
    pub fn tracking_number(mut self, value: impl Into<String>) -> Self {
        self.tracking_number = Some(value.into());
        self
    }

    /// Ship date.
    #[must_use]
    pub const fn ship_date(mut self, value: MarketDate) -> Self {
        self.ship_date = Some(value);
        self
    }

    /// Expected delivery date.
    #[must_use]
    pub const fn expected_delivery_date(mut self, value: MarketDate) -> Self {
        self.expected_delivery_date = Some(value);
        self
    }

    /// Ship-from location.
    #[must_use]
    pub fn ship_from(mut self, value: Address) -> Self {
        self.ship_from = Some(value);
        self
    }

    /// Return-to address.
    #[must_use]
    pub fn return_to(mut self, value: Address) -> Self {
        self.return_to = Some(value);
        self
    }

    /// RMA number.
    #[must_use]
    pub fn rma_number(mut self, value: impl Into<String>) -> Self {
        self.rma_number = Some(value.into());
        self
    }

    /// Append a line item.
    #[must_use]
    pub fn item(mut self, value: ShipmentItem) -> Self {
        self.items.push(value);
        self
    }

    /// Replace the line items.
    #[must_use]
    pub fn items(mut self, value: Vec<ShipmentItem>) -> Self {
        self.items = value;
        self
    }

    /// Validate and construct the shipment.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn build(self) -> Result<Shipment, ValidationError> {
        if self.items.is_empty() {
            return Err(ValidationError::new(
                "items",
                "shipment must have at least one item",
            ));
        }

        let cancel_only = self.items.iter().all(|i| i.quantity_shipped() == 0);
        let alt_shipment_id = self.alt_shipment_id.filter(|s| !s.trim().is_empty());

        if cancel_only {
            if alt_shipment_id.is_none() {
                return Err(ValidationError::new(
                    "alt_shipment_id",
                    "cancel-only shipments must declare an alternate shipment id",
                ));
            }
        } else {
            if self.carrier.is_none() {
                return Err(ValidationError::required("carrier"));
            }
            if self
                .tracking_number
                .as_deref()
                .is_none_or(|t| t.trim().is_empty())
            {
                return Err(ValidationError::required("tracking_number"));
            }
        }

        Ok(Shipment {
            shipment_id: self.shipment_id.filter(|s| !s.is_empty()),
            alt_shipment_id,
            carrier: self.carrier,
            tracking_number: self.tracking_number.filter(|s| !s.is_empty()),
            ship_date: self.ship_date,
            expected_delivery_date: self.expected_delivery_date,
            ship_from: self.ship_from,
            return_to: self.return_to,
            rma_number: self.rma_number.filter(|s| !s.is_empty()),
            items: self.items,
        })
    }
}

/// One line item within a shipment, split between shipped and cancelled
/// quantities.
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentItem {
    order_item_id: String,
    merchant_sku: String,
    quantity_ordered: u32,
    quantity_shipped: u32,
    quantity_cancelled: u32,
    rma_number: Option<String>,
}

impl ShipmentItem {
    /// Start building a shipment item. Prefer deriving one from an order
    /// item via [`convert::shipment_item`](crate::convert::shipment_item),
    /// which carries the ordered quantity over.
    #[must_use]
    pub fn builder() -> ShipmentItemBuilder {
        ShipmentItemBuilder::default()
    }

    /// The order line item this ships.
    #[must_use]
    pub fn order_item_id(&self) -> &str {
        &self.order_item_id
    }

    /// Merchant sku.
    #[must_use]
    pub fn merchant_sku(&self) -> &str {
        &self.merchant_sku
    }

    /// Quantity ordered on the source line.
    #[must_use]
    pub const fn quantity_ordered(&self) -> u32 {
        self.quantity_ordered
    }

    /// Quantity shipped.
    #[must_use]
    pub const fn quantity_shipped(&self) -> u32 {
        self.quantity_shipped
    }

    /// Quantity cancelled.
    #[must_use]
    pub const fn quantity_cancelled(&self) -> u32 {
        self.quantity_cancelled
    }

    /// Item-level RMA number override.
    #[must_use]
    pub fn rma_number(&self) -> Option<&str> {
        self.rma_number.as_deref()
    }
}

/// Chained-setter builder for [`ShipmentItem`].
#[derive(Debug, Default)]
pub struct ShipmentItemBuilder {
    order_item_id: Option<String>,
    merchant_sku: Option<String>,
    quantity_ordered: Option<u32>,
    quantity_shipped: Option<u32>,
    quantity_cancelled: Option<u32>,
    rma_number: Option<String>,
}

impl ShipmentItemBuilder {
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

    /// Quantity ordered on the source line (required).
    #[must_use]
    pub const fn quantity_ordered(mut self, value: u32) -> Self {
        self.quantity_ordered = Some(value);
        self
    }

    /// Quantity shipped.
    #[must_use]
    pub const fn quantity_shipped(mut self, value: u32) -> Self {
        self.quantity_shipped = Some(value);
        self
    }

    /// Quantity cancelled.
    #[must_use]
    pub const fn quantity_cancelled(mut self, value: u32) -> Self {
        self.quantity_cancelled = Some(value);
        self
    }

    /// Redistribute the ship/cancel split in one call.
    #[must_use]
    pub const fn split(mut self, shipped: u32, cancelled: u32) -> Self {
        self.quantity_shipped = Some(shipped);
        self.quantity_cancelled = Some(cancelled);
        self
    }

    /// Cancel the full ordered quantity.
    #[must_use]
    pub fn cancel_all(self) -> Self {
        let ordered = self.quantity_ordered.unwrap_or(0);
        self.split(0, ordered)
    }

    /// Item-level RMA number (optional).
    #[must_use]
    pub fn rma_number(mut self, value: impl Into<String>) -> Self {
        self.rma_number = Some(value.into());
        self
    }

    /// Validate and construct the item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if identity fields are missing or the
    /// ship/cancel split does not sum to the quantity ordered.
    pub fn build(self) -> Result<ShipmentItem, ValidationError> {
        let order_item_id = non_empty(self.order_item_id, "order_item_id")?;
        let merchant_sku = non_empty(self.merchant_sku, "merchant_sku")?;
        let quantity_ordered = self
            .quantity_ordered
            .ok_or_else(|| ValidationError::required("quantity_ordered"))?;
        let quantity_shipped = self
            .quantity_shipped
            .ok_or_else(|| ValidationError::required("quantity_shipped"))?;
        let quantity_cancelled = self
            .quantity_cancelled
            .ok_or_else(|| ValidationError::required("quantity_cancelled"))?;

        let split_total = u64::from(quantity_shipped) + u64::from(quantity_cancelled);
        if split_total != u64::from(quantity_ordered) {
            return Err(ValidationError::new(
                "quantity_shipped",
                format!(
                    "shipped ({quantity_shipped}) + cancelled ({quantity_cancelled}) \
                     must equal quantity ordered ({quantity_ordered})"
                ),
            ));
        }

        Ok(ShipmentItem {
            order_item_id,
            merchant_sku,
            quantity_ordered,
            quantity_shipped,
            quantity_cancelled,
            rma_number: self.rma_number.filter(|s| !s.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sku: &str, ordered: u32, shipped: u32, cancelled: u32) -> ShipmentItem {
        ShipmentItem::builder()
            .order_item_id(format!("itm-{sku}"))
            .merchant_sku(sku)
            .quantity_ordered(ordered)
            .split(shipped, cancelled)
            .build()
            .expect("shipment item")
    }

    #[test]
    fn test_split_must_sum_to_ordered() {
        let err = ShipmentItem::builder()
            .order_item_id("itm-1")
            .merchant_sku("SKU-A")
            .quantity_ordered(3)
            .split(1, 1)
            .build()
            .expect_err("should fail");
        assert_eq!(err.field, "quantity_shipped");

        // Over-shipping is rejected the same way.
        assert!(
            ShipmentItem::builder()
                .order_item_id("itm-1")
                .merchant_sku("SKU-A")
                .quantity_ordered(3)
                .split(3, 1)
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_exact_split_builds() {
        let full = item("SKU-A", 3, 3, 0);
        assert_eq!(full.quantity_shipped(), 3);
        let partial = item("SKU-B", 3, 2, 1);
        assert_eq!(partial.quantity_cancelled(), 1);
    }

    #[test]
    fn test_cancel_all_helper() {
        let cancelled = ShipmentItem::builder()
            .order_item_id("itm-1")
            .merchant_sku("SKU-A")
            .quantity_ordered(4)
            .cancel_all()
            .build()
            .expect("build");
        assert_eq!(cancelled.quantity_shipped(), 0);
        assert_eq!(cancelled.quantity_cancelled(), 4);
    }

    #[test]
    fn test_shipment_requires_tracking_when_shipping() {
        let err = Shipment::builder()
            .carrier(ShippingCarrier::Ups)
            .item(item("SKU-A", 2, 2, 0))
            .build()
            .expect_err("should fail");
        assert_eq!(err.field, "tracking_number");
    }

    #[test]
    fn test_cancel_only_requires_alt_shipment_id() {
        let err = Shipment::builder()
            .item(item("SKU-A", 2, 0, 2))
            .item(item("SKU-B", 1, 0, 1))
            .build()
            .expect_err("should fail");
        assert_eq!(err.field, "alt_shipment_id");

        let shipment = Shipment::builder()
            .alt_shipment_id("CNCL-0000000042")
            .item(item("SKU-A", 2, 0, 2))
            .build()
            .expect("build");
        assert!(shipment.is_cancel_only());
        assert_eq!(shipment.alt_shipment_id(), Some("CNCL-0000000042"));
    }

    #[test]
    fn test_mixed_shipment_builds_without_alt_id() {
        let shipment = Shipment::builder()
            .carrier(ShippingCarrier::FedEx)
            .tracking_number("794644790132")
            .item(item("SKU-A", 2, 2, 0))
            .item(item("SKU-B", 1, 0, 1))
            .build()
            .expect("build");
        assert!(!shipment.is_cancel_only());
        assert_eq!(shipment.carrier(), Some(ShippingCarrier::FedEx));
    }
}
