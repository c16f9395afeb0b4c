//! Refund aggregate.

use serde::Serialize;

use super::order::non_empty;
use crate::error::ValidationError;
use crate::status::{RefundReason, RefundStatus};
use crate::types::Money;

/// A refund request or a retrieved refund.
///
/// Refund items are always derived from an order's items - never created
/// from scratch - so every [`RefundItem`] traces back to exactly one order
/// line.
#[derive(Debug, Clone, Serialize)]
pub struct Refund {
    refund_id: Option<String>,
    merchant_order_id: String,
    return_auth_id: Option<String>,
    alt_refund_id: Option<String>,
    status: RefundStatus,
    items: Vec<RefundItem>,
}

impl Refund {
    /// Start building a refund.
    #[must_use]
    pub fn builder() -> RefundBuilder {
        RefundBuilder::default()
    }

    /// Marketplace refund id (absent on outbound requests).
    #[must_use]
    pub fn refund_id(&self) -> Option<&str> {
        self.refund_id.as_deref()
    }

    /// The order being refunded.
    #[must_use]
    pub fn merchant_order_id(&self) -> &str {
        &self.merchant_order_id
    }

    /// Return authorization the refund settles, when one exists.
    #[must_use]
    pub fn return_auth_id(&self) -> Option<&str> {
        self.return_auth_id.as_deref()
    }

    /// Merchant-supplied alternate refund id.
    #[must_use]
    pub fn alt_refund_id(&self) -> Option<&str> {
        self.alt_refund_id.as_deref()
    }

    /// Current refund status.
    #[must_use]
    pub const fn status(&self) -> RefundStatus {
        self.status
    }

    /// Refunded line items.
    #[must_use]
    pub fn items(&self) -> &[RefundItem] {
        &self.items
    }
}

/// Chained-setter builder for [`Refund`].
#[derive(Debug, Default)]
pub struct RefundBuilder {
    refund_id: Option<String>,
    merchant_order_id: Option<String>,
    return_auth_id: Option<String>,
    alt_refund_id: Option<String>,
    status: Option<RefundStatus>,
    items: Vec<RefundItem>,
}

impl RefundBuilder {
    /// Marketplace refund id (set when parsing a retrieved refund).
    #[must_use]
    pub fn refund_id(mut self, value: impl Into<String>) -> Self {
        self.refund_id = Some(value.into());
        self
    }

    /// Merchant order id (required).
    #[must_use]
    pub fn merchant_order_id(mut self, value: impl Into<String>) -> Self {
        self.merchant_order_id = Some(value.into());
        self
    }

    /// Linked return authorization id (optional).
    #[must_use]
    pub fn return_auth_id(mut self, value: impl Into<String>) -> Self {
        self.return_auth_id = Some(value.into());
        self
    }

    /// Alternate refund id (optional).
    #[must_use]
    pub fn alt_refund_id(mut self, value: impl Into<String>) -> Self {
        self.alt_refund_id = Some(value.into());
        self
    }

    /// Refund status (defaults to [`RefundStatus::Created`] for outbound
    /// requests).
    #[must_use]
    pub const fn status(mut self, value: RefundStatus) -> Self {
        self.status = Some(value);
        self
    }

    /// Append a refunded item.
    #[must_use]
    pub fn item(mut self, value: RefundItem) -> Self {
        self.items.push(value);
        self
    }

    /// Replace the refunded items.
    #[must_use]
    pub fn items(mut self, value: Vec<RefundItem>) -> Self {
        self.items = value;
        self
    }

    /// Validate and construct the refund.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn build(self) -> Result<Refund, ValidationError> {
        let merchant_order_id = non_empty(self.merchant_order_id, "merchant_order_id")?;

        if self.items.is_empty() {
            return Err(ValidationError::new(
                "items",
                "refund must cover at least one item",
            ));
        }

        Ok(Refund {
            refund_id: self.refund_id.filter(|s| !s.is_empty()),
            merchant_order_id,
            return_auth_id: self.return_auth_id.filter(|s| !s.is_empty()),
            alt_refund_id: self.alt_refund_id.filter(|s| !s.is_empty()),
            status: self.status.unwrap_or(RefundStatus::Created),
            items: self.items,
        })
    }
}

/// One refunded line item.
#[derive(Debug, Clone, Serialize)]
pub struct RefundItem {
    order_item_id: String,
    merchant_sku: String,
    quantity: u32,
    refund_reason: RefundReason,
    refund_amount: Option<Money>,
    notes: Option<String>,
}

impl RefundItem {
    /// Start building a refund item. Prefer deriving one from an order item
    /// via [`convert::refund_item`](crate::convert::refund_item), which
    /// carries identity and enforces the quantity ceiling.
    #[must_use]
    pub fn builder() -> RefundItemBuilder {
        RefundItemBuilder::default()
    }

    /// The order line item this refunds.
    #[must_use]
    pub fn order_item_id(&self) -> &str {
        &self.order_item_id
    }

    /// Merchant sku.
    #[must_use]
    pub fn merchant_sku(&self) -> &str {
        &self.merchant_sku
    }

    /// Quantity refunded.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Why the item is being refunded.
    #[must_use]
    pub const fn refund_reason(&self) -> RefundReason {
        self.refund_reason
    }

    /// Amount refunded for this line, when itemized.
    #[must_use]
    pub const fn refund_amount(&self) -> Option<Money> {
        self.refund_amount
    }

    /// Free-text notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Chained-setter builder for [`RefundItem`].
#[derive(Debug, Default)]
pub struct RefundItemBuilder {
    order_item_id: Option<String>,
    merchant_sku: Option<String>,
    quantity: Option<u32>,
    quantity_ordered: Option<u32>,
    refund_reason: Option<RefundReason>,
    refund_amount: Option<Money>,
    notes: Option<String>,
}

impl RefundItemBuilder {
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

    /// Quantity refunded (required, at least 1).
    #[must_use]
    pub const fn quantity(mut self, value: u32) -> Self {
        self.quantity = Some(value);
        self
    }

    /// Quantity ordered on the source line; when set, `build()` enforces
    /// `quantity <= quantity_ordered`. The conversion pipeline sets this.
    #[must_use]
    pub const fn quantity_ordered(mut self, value: u32) -> Self {
        self.quantity_ordered = Some(value);
        self
    }

    /// Refund reason (required).
    #[must_use]
    pub const fn refund_reason(mut self, value: RefundReason) -> Self {
        self.refund_reason = Some(value);
        self
    }

    /// Itemized refund amount (optional).
    #[must_use]
    pub const fn refund_amount(mut self, value: Money) -> Self {
        self.refund_amount = Some(value);
        self
    }

    /// Free-text notes (optional).
    #[must_use]
    pub fn notes(mut self, value: impl Into<String>) -> Self {
        self.notes = Some(value.into());
        self
    }

    /// Validate and construct the item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn build(self) -> Result<RefundItem, ValidationError> {
        let order_item_id = non_empty(self.order_item_id, "order_item_id")?;
        let merchant_sku = non_empty(self.merchant_sku, "merchant_sku")?;
        let quantity = self
            .quantity
            .ok_or_else(|| ValidationError::required("quantity"))?;
        let refund_reason = self
            .refund_reason
            .ok_or_else(|| ValidationError::required("refund_reason"))?;

        if quantity == 0 {
            return Err(ValidationError::new("quantity", "must be at least 1"));
        }
        if let Some(ordered) = self.quantity_ordered
            && quantity > ordered
        {
            return Err(ValidationError::new(
                "quantity",
                format!("must not exceed quantity ordered ({ordered})"),
            ));
        }
        if let Some(amount) = self.refund_amount
            && amount.is_negative()
        {
            return Err(ValidationError::new("refund_amount", "must not be negative"));
        }

        Ok(RefundItem {
            order_item_id,
            merchant_sku,
            quantity,
            refund_reason,
            refund_amount: self.refund_amount,
            notes: self.notes.filter(|s| !s.is_empty()),
        })
    }
}
