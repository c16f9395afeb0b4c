//! Return authorization aggregate and the completion transition.

use serde::Serialize;

use super::order::non_empty;
use crate::error::ValidationError;
use crate::status::{ChargeFeedback, ReturnFeedback, ReturnStatus};
use crate::types::{Address, MarketDate, Money, ShippingCarrier};

/// A return authorization retrieved from the marketplace.
///
/// Moves `Created -> InProgress -> Completed`; completion happens only
/// through [`OrderReturn::completed`] with an explicit
/// [`CompleteReturnRequest`] carrying the merchant's charge decision.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReturn {
    return_auth_id: String,
    merchant_order_id: String,
    alt_order_id: Option<String>,
    alt_return_auth_id: Option<String>,
    status: ReturnStatus,
    return_date: Option<MarketDate>,
    merchant_return_charge: Option<Money>,
    agree_to_return_charge: bool,
    refund_without_return: bool,
    carrier: Option<ShippingCarrier>,
    tracking_number: Option<String>,
    return_locations: Vec<Address>,
    items: Vec<ReturnItem>,
}

impl OrderReturn {
    /// Start building a return.
    #[must_use]
    pub fn builder() -> OrderReturnBuilder {
        OrderReturnBuilder::default()
    }

    /// Marketplace return authorization id (the poll token).
    #[must_use]
    pub fn return_auth_id(&self) -> &str {
        &self.return_auth_id
    }

    /// The order the return belongs to.
    #[must_use]
    pub fn merchant_order_id(&self) -> &str {
        &self.merchant_order_id
    }

    /// Alternate order id established at acknowledgment time.
    #[must_use]
    pub fn alt_order_id(&self) -> Option<&str> {
        self.alt_order_id.as_deref()
    }

    /// Merchant-supplied alternate return authorization id.
    #[must_use]
    pub fn alt_return_auth_id(&self) -> Option<&str> {
        self.alt_return_auth_id.as_deref()
    }

    /// Current return status.
    #[must_use]
    pub const fn status(&self) -> ReturnStatus {
        self.status
    }

    /// When the customer requested the return.
    #[must_use]
    pub const fn return_date(&self) -> Option<MarketDate> {
        self.return_date
    }

    /// Charge the merchant pays the marketplace for the return.
    #[must_use]
    pub const fn merchant_return_charge(&self) -> Option<Money> {
        self.merchant_return_charge
    }

    /// Whether the merchant agreed to the return charge.
    #[must_use]
    pub const fn agree_to_return_charge(&self) -> bool {
        self.agree_to_return_charge
    }

    /// Marketplace decided the item should not be returned, only refunded.
    #[must_use]
    pub const fn refund_without_return(&self) -> bool {
        self.refund_without_return
    }

    /// Carrier of the return shipment.
    #[must_use]
    pub const fn carrier(&self) -> Option<ShippingCarrier> {
        self.carrier
    }

    /// Tracking number of the return shipment.
    #[must_use]
    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }

    /// Locations the customer may return to.
    #[must_use]
    pub fn return_locations(&self) -> &[Address] {
        &self.return_locations
    }

    /// Returned line items (present once the return is in progress).
    #[must_use]
    pub fn items(&self) -> &[ReturnItem] {
        &self.items
    }

    /// Derive the completed return from this one and a completion request.
    ///
    /// Identity fields carry forward; status becomes
    /// [`ReturnStatus::Completed`]; the charge decision and per-item
    /// dispositions come from the request. The original value is untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the return is already completed.
    pub fn completed(&self, request: &CompleteReturnRequest) -> Result<Self, ValidationError> {
        if self.status == ReturnStatus::Completed {
            return Err(ValidationError::new("status", "return is already completed"));
        }

        let mut next = self.clone();
        next.status = ReturnStatus::Completed;
        next.agree_to_return_charge = request.agree_to_return_charge();
        next.alt_return_auth_id = request
            .alt_return_auth_id()
            .map(ToOwned::to_owned)
            .or(next.alt_return_auth_id);
        if !request.items().is_empty() {
            next.items = request.items().to_vec();
        }
        Ok(next)
    }
}

/// Chained-setter builder for [`OrderReturn`].
#[derive(Debug, Default)]
pub struct OrderReturnBuilder {
    return_auth_id: Option<String>,
    merchant_order_id: Option<String>,
    alt_order_id: Option<String>,
    alt_return_auth_id: Option<String>,
    status: Option<ReturnStatus>,
    return_date: Option<MarketDate>,
    merchant_return_charge: Option<Money>,
    agree_to_return_charge: bool,
    refund_without_return: bool,
    carrier: Option<ShippingCarrier>,
    tracking_number: Option<String>,
    return_locations: Vec<Address>,
    items: Vec<ReturnItem>,
}

impl OrderReturnBuilder {
    /// Return authorization id (required).
    #[must_use]
    pub fn return_auth_id(mut self, value: impl Into<String>) -> Self {
        self.return_auth_id = Some(value.into());
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

    /// Alternate return authorization id (optional).
    #[must_use]
    pub fn alt_return_auth_id(mut self, value: impl Into<String>) -> Self {
        self.alt_return_auth_id = Some(value.into());
        self
    }

    /// Return status (required).
    #[must_use]
    pub const fn status(mut self, value: ReturnStatus) -> Self {
        self.status = Some(value);
        self
    }

    /// Return request date (optional).
    #[must_use]
    pub const fn return_date(mut self, value: MarketDate) -> Self {
        self.return_date = Some(value);
        self
    }

    /// Merchant return charge (required once the merchant agrees to it).
    #[must_use]
    pub const fn merchant_return_charge(mut self, value: Money) -> Self {
        self.merchant_return_charge = Some(value);
        self
    }

    /// Whether the merchant agrees to the return charge.
    #[must_use]
    pub const fn agree_to_return_charge(mut self, value: bool) -> Self {
        self.agree_to_return_charge = value;
        self
    }

    /// Refund-without-return flag.
    #[must_use]
    pub const fn refund_without_return(mut self, value: bool) -> Self {
        self.refund_without_return = value;
        self
    }

    /// Return shipment carrier (optional).
    #[must_use]
    pub const fn carrier(mut self, value: ShippingCarrier) -> Self {
        self.carrier = Some(value);
        self
    }

    /// Return shipment tracking number (optional).
    #[must_use]
    pub fn tracking_number(mut self, value: impl Into<String>) -> Self {
        self.tracking_number = Some(value.into());
        self
    }

    /// Append a return location.
    #[must_use]
    pub fn return_location(mut self, value: Address) -> Self {
        self.return_locations.push(value);
        self
    }

    /// Replace the return locations.
    #[must_use]
    pub fn return_locations(mut self, value: Vec<Address>) -> Self {
        self.return_locations = value;
        self
    }

    /// Append a returned item.
    #[must_use]
    pub fn item(mut self, value: ReturnItem) -> Self {
        self.items.push(value);
        self
    }

    /// Replace the returned items.
    #[must_use]
    pub fn items(mut self, value: Vec<ReturnItem>) -> Self {
        self.items = value;
        self
    }

    /// Validate and construct the return.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field. Agreeing
    /// to a return charge without a charge amount is rejected: the money
    /// field must be present when the status implies a charge.
    pub fn build(self) -> Result<OrderReturn, ValidationError> {
        let return_auth_id = non_empty(self.return_auth_id, "return_auth_id")?;
        let merchant_order_id = non_empty(self.merchant_order_id, "merchant_order_id")?;
        let status = self
            .status
            .ok_or_else(|| ValidationError::required("status"))?;

        if self.agree_to_return_charge && self.merchant_return_charge.is_none() {
            return Err(ValidationError::new(
                "merchant_return_charge",
                "required when the merchant agrees to the return charge",
            ));
        }
        if let Some(charge) = self.merchant_return_charge
            && charge.is_negative()
        {
            return Err(ValidationError::new(
                "merchant_return_charge",
                "must not be negative",
            ));
        }

        Ok(OrderReturn {
            return_auth_id,
            merchant_order_id,
            alt_order_id: self.alt_order_id.filter(|s| !s.is_empty()),
            alt_return_auth_id: self.alt_return_auth_id.filter(|s| !s.is_empty()),
            status,
            return_date: self.return_date,
            merchant_return_charge: self.merchant_return_charge,
            agree_to_return_charge: self.agree_to_return_charge,
            refund_without_return: self.refund_without_return,
            carrier: self.carrier,
            tracking_number: self.tracking_number.filter(|s| !s.is_empty()),
            return_locations: self.return_locations,
            items: self.items,
        })
    }
}

/// The transition request that completes a return.
///
/// Always carries the merchant's charge-dispute decision: the agree flag
/// and a [`ChargeFeedback`] reason are both required at build time.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteReturnRequest {
    agree_to_return_charge: bool,
    charge_feedback: ChargeFeedback,
    alt_return_auth_id: Option<String>,
    items: Vec<ReturnItem>,
}

impl CompleteReturnRequest {
    /// Start building a completion request.
    #[must_use]
    pub fn builder() -> CompleteReturnRequestBuilder {
        CompleteReturnRequestBuilder::default()
    }

    /// Merchant's decision on the return charge.
    #[must_use]
    pub const fn agree_to_return_charge(&self) -> bool {
        self.agree_to_return_charge
    }

    /// Reason backing the charge decision.
    #[must_use]
    pub const fn charge_feedback(&self) -> ChargeFeedback {
        self.charge_feedback
    }

    /// Merchant return number to include on customer documentation.
    #[must_use]
    pub fn alt_return_auth_id(&self) -> Option<&str> {
        self.alt_return_auth_id.as_deref()
    }

    /// Per-item dispositions.
    #[must_use]
    pub fn items(&self) -> &[ReturnItem] {
        &self.items
    }
}

/// Chained-setter builder for [`CompleteReturnRequest`].
#[derive(Debug, Default)]
pub struct CompleteReturnRequestBuilder {
    agree_to_return_charge: Option<bool>,
    charge_feedback: Option<ChargeFeedback>,
    alt_return_auth_id: Option<String>,
    items: Vec<ReturnItem>,
}

impl CompleteReturnRequestBuilder {
    /// Charge decision (required).
    #[must_use]
    pub const fn agree_to_return_charge(mut self, value: bool) -> Self {
        self.agree_to_return_charge = Some(value);
        self
    }

    /// Charge feedback reason (required).
    #[must_use]
    pub const fn charge_feedback(mut self, value: ChargeFeedback) -> Self {
        self.charge_feedback = Some(value);
        self
    }

    /// Merchant return number (optional).
    #[must_use]
    pub fn alt_return_auth_id(mut self, value: impl Into<String>) -> Self {
        self.alt_return_auth_id = Some(value.into());
        self
    }

    /// Append an item disposition.
    #[must_use]
    pub fn item(mut self, value: ReturnItem) -> Self {
        self.items.push(value);
        self
    }

    /// Replace the item dispositions.
    #[must_use]
    pub fn items(mut self, value: Vec<ReturnItem>) -> Self {
        self.items = value;
        self
    }

    /// Validate and construct the request.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the charge decision or feedback is
    /// missing.
    pub fn build(self) -> Result<CompleteReturnRequest, ValidationError> {
        let agree_to_return_charge = self
            .agree_to_return_charge
            .ok_or_else(|| ValidationError::required("agree_to_return_charge"))?;
        let charge_feedback = self
            .charge_feedback
            .ok_or_else(|| ValidationError::required("charge_feedback"))?;

        Ok(CompleteReturnRequest {
            agree_to_return_charge,
            charge_feedback,
            alt_return_auth_id: self.alt_return_auth_id.filter(|s| !s.is_empty()),
            items: self.items,
        })
    }
}

/// One returned line item with the merchant's condition feedback.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnItem {
    order_item_id: Option<String>,
    merchant_sku: String,
    quantity: u32,
    feedback: Option<ReturnFeedback>,
    notes: Option<String>,
}

impl ReturnItem {
    /// Start building a return item. Prefer deriving one from an order item
    /// via [`convert::return_item`](crate::convert::return_item), which
    /// enforces the quantity ceiling.
    #[must_use]
    pub fn builder() -> ReturnItemBuilder {
        ReturnItemBuilder::default()
    }

    /// The order line item being returned.
    #[must_use]
    pub fn order_item_id(&self) -> Option<&str> {
        self.order_item_id.as_deref()
    }

    /// Merchant sku.
    #[must_use]
    pub fn merchant_sku(&self) -> &str {
        &self.merchant_sku
    }

    /// Quantity returned.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Condition feedback.
    #[must_use]
    pub const fn feedback(&self) -> Option<ReturnFeedback> {
        self.feedback
    }

    /// Free-text notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Chained-setter builder for [`ReturnItem`].
#[derive(Debug, Default)]
pub struct ReturnItemBuilder {
    order_item_id: Option<String>,
    merchant_sku: Option<String>,
    quantity: Option<u32>,
    quantity_ordered: Option<u32>,
    feedback: Option<ReturnFeedback>,
    notes: Option<String>,
}

impl ReturnItemBuilder {
    /// Order line-item id (optional on inbound documents).
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

    /// Quantity returned (required, at least 1).
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

    /// Condition feedback (optional).
    #[must_use]
    pub const fn feedback(mut self, value: ReturnFeedback) -> Self {
        self.feedback = Some(value);
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
    pub fn build(self) -> Result<ReturnItem, ValidationError> {
        let merchant_sku = non_empty(self.merchant_sku, "merchant_sku")?;
        let quantity = self
            .quantity
            .ok_or_else(|| ValidationError::required("quantity"))?;

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

        Ok(ReturnItem {
            order_item_id: self.order_item_id.filter(|s| !s.is_empty()),
            merchant_sku,
            quantity,
            feedback: self.feedback,
            notes: self.notes.filter(|s| !s.is_empty()),
        })
    }
}
