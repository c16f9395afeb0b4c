//! Order aggregate - the root entity every other lifecycle entity derives
//! from.

use serde::Serialize;

use crate::error::ValidationError;
use crate::status::OrderStatus;
use crate::types::{Address, MarketDate, Money, ShippingCarrier};

/// A retrieved marketplace order.
///
/// Immutable once constructed; the controller derives acknowledgments,
/// shipments, returns, and refunds from it without ever mutating it.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    order_token: String,
    merchant_order_id: String,
    alt_order_id: Option<String>,
    status: OrderStatus,
    placed_date: Option<MarketDate>,
    requested_carrier: Option<ShippingCarrier>,
    destination: Address,
    order_total: Money,
    items: Vec<OrderItem>,
}

impl Order {
    /// Start building an order.
    #[must_use]
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    /// Opaque marketplace token identifying this order (used in URLs and
    /// status polls).
    #[must_use]
    pub fn order_token(&self) -> &str {
        &self.order_token
    }

    /// The marketplace's unique id for the merchant order.
    #[must_use]
    pub fn merchant_order_id(&self) -> &str {
        &self.merchant_order_id
    }

    /// Merchant-supplied alternate order id, if one was established.
    #[must_use]
    pub fn alt_order_id(&self) -> Option<&str> {
        self.alt_order_id.as_deref()
    }

    /// Current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// When the customer placed the order.
    #[must_use]
    pub const fn placed_date(&self) -> Option<MarketDate> {
        self.placed_date
    }

    /// Carrier the marketplace requested for fulfillment.
    #[must_use]
    pub const fn requested_carrier(&self) -> Option<ShippingCarrier> {
        self.requested_carrier
    }

    /// Shipping destination.
    #[must_use]
    pub const fn destination(&self) -> &Address {
        &self.destination
    }

    /// Order total.
    #[must_use]
    pub const fn order_total(&self) -> Money {
        self.order_total
    }

    /// Ordered line items.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }
}

/// Chained-setter builder for [`Order`].
#[derive(Debug, Default)]
pub struct OrderBuilder {
    order_token: Option<String>,
    merchant_order_id: Option<String>,
    alt_order_id: Option<String>,
    status: Option<OrderStatus>,
    placed_date: Option<MarketDate>,
    requested_carrier: Option<ShippingCarrier>,
    destination: Option<Address>,
    order_total: Option<Money>,
    items: Vec<OrderItem>,
}

impl OrderBuilder {
    /// Marketplace order token (required).
    #[must_use]
    pub fn order_token(mut self, value: impl Into<String>) -> Self {
        self.order_token = Some(value.into());
        self
    }

    /// Merchant order id (required).
    #[must_use]
    pub fn merchant_order_id(mut self, value: impl Into<String>) -> Self {
        self.merchant_order_id = Some(value.into());
        self
    }

    /// Alternate order id (optional).
    #[must_use]
    pub fn alt_order_id(mut self, value: impl Into<String>) -> Self {
        self.alt_order_id = Some(value.into());
        self
    }

    /// Lifecycle status (required).
    #[must_use]
    pub const fn status(mut self, value: OrderStatus) -> Self {
        self.status = Some(value);
        self
    }

    /// Placed date (optional).
    #[must_use]
    pub const fn placed_date(mut self, value: MarketDate) -> Self {
        self.placed_date = Some(value);
        self
    }

    /// Requested shipping carrier (optional).
    #[must_use]
    pub const fn requested_carrier(mut self, value: ShippingCarrier) -> Self {
        self.requested_carrier = Some(value);
        self
    }

    /// Shipping destination (required).
    #[must_use]
    pub fn destination(mut self, value: Address) -> Self {
        self.destination = Some(value);
        self
    }

    /// Order total (required).
    #[must_use]
    pub const fn order_total(mut self, value: Money) -> Self {
        self.order_total = Some(value);
        self
    }

    /// Append a line item.
    #[must_use]
    pub fn item(mut self, value: OrderItem) -> Self {
        self.items.push(value);
        self
    }

    /// Replace the line items.
    #[must_use]
    pub fn items(mut self, value: Vec<OrderItem>) -> Self {
        self.items = value;
        self
    }

    /// Validate all fields and construct the order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn build(self) -> Result<Order, ValidationError> {
        let order_token = non_empty(self.order_token, "order_token")?;
        let merchant_order_id = non_empty(self.merchant_order_id, "merchant_order_id")?;
        let status = self
            .status
            .ok_or_else(|| ValidationError::required("status"))?;
        let destination = self
            .destination
            .ok_or_else(|| ValidationError::required("destination"))?;
        let order_total = self
            .order_total
            .ok_or_else(|| ValidationError::required("order_total"))?;

        if order_total.is_negative() {
            return Err(ValidationError::new("order_total", "must not be negative"));
        }
        if self.items.is_empty() {
            return Err(ValidationError::new("items", "order must have at least one item"));
        }

        Ok(Order {
            order_token,
            merchant_order_id,
            alt_order_id: self.alt_order_id.filter(|s| !s.is_empty()),
            status,
            placed_date: self.placed_date,
            requested_carrier: self.requested_carrier,
            destination,
            order_total,
            items: self.items,
        })
    }
}

/// A single ordered line item.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    order_item_id: String,
    merchant_sku: String,
    title: Option<String>,
    quantity_ordered: u32,
    unit_price: Money,
    fulfillment_node: Option<String>,
}

impl OrderItem {
    /// Start building an order item.
    #[must_use]
    pub fn builder() -> OrderItemBuilder {
        OrderItemBuilder::default()
    }

    /// Marketplace id for this line item.
    #[must_use]
    pub fn order_item_id(&self) -> &str {
        &self.order_item_id
    }

    /// Merchant sku.
    #[must_use]
    pub fn merchant_sku(&self) -> &str {
        &self.merchant_sku
    }

    /// Product title, when the marketplace sent one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Quantity the customer ordered.
    #[must_use]
    pub const fn quantity_ordered(&self) -> u32 {
        self.quantity_ordered
    }

    /// Price per unit.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Fulfillment node the inventory is associated with.
    #[must_use]
    pub fn fulfillment_node(&self) -> Option<&str> {
        self.fulfillment_node.as_deref()
    }
}

/// Chained-setter builder for [`OrderItem`].
#[derive(Debug, Default)]
pub struct OrderItemBuilder {
    order_item_id: Option<String>,
    merchant_sku: Option<String>,
    title: Option<String>,
    quantity_ordered: Option<u32>,
    unit_price: Option<Money>,
    fulfillment_node: Option<String>,
}

impl OrderItemBuilder {
    /// Marketplace line-item id (required).
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

    /// Product title (optional).
    #[must_use]
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Quantity ordered (required, at least 1).
    #[must_use]
    pub const fn quantity_ordered(mut self, value: u32) -> Self {
        self.quantity_ordered = Some(value);
        self
    }

    /// Unit price (required).
    #[must_use]
    pub const fn unit_price(mut self, value: Money) -> Self {
        self.unit_price = Some(value);
        self
    }

    /// Fulfillment node (optional).
    #[must_use]
    pub fn fulfillment_node(mut self, value: impl Into<String>) -> Self {
        self.fulfillment_node = Some(value.into());
        self
    }

    /// Validate all fields and construct the item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn build(self) -> Result<OrderItem, ValidationError> {
        let order_item_id = non_empty(self.order_item_id, "order_item_id")?;
        let merchant_sku = non_empty(self.merchant_sku, "merchant_sku")?;
        let quantity_ordered = self
            .quantity_ordered
            .ok_or_else(|| ValidationError::required("quantity_ordered"))?;
        let unit_price = self
            .unit_price
            .ok_or_else(|| ValidationError::required("unit_price"))?;

        if quantity_ordered == 0 {
            return Err(ValidationError::new("quantity_ordered", "must be at least 1"));
        }
        if unit_price.is_negative() {
            return Err(ValidationError::new("unit_price", "must not be negative"));
        }

        Ok(OrderItem {
            order_item_id,
            merchant_sku,
            title: self.title,
            quantity_ordered,
            unit_price,
            fulfillment_node: self.fulfillment_node,
        })
    }
}

pub(crate) fn non_empty(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::required(field)),
    }
}
