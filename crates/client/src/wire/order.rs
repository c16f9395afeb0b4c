//! Order wire documents (inbound only - orders are never written back
//! wholesale, they transition via acknowledgments and shipments).

use serde::{Deserialize, Serialize};
use tradewinds_core::entity::{Order, OrderItem};
use tradewinds_core::status::OrderStatus;
use tradewinds_core::types::{MarketDate, Money, ShippingCarrier};

use super::common::{AddressDoc, address_from_doc, doc_invalid};
use crate::error::ApiError;

/// Response to an order status poll.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderUrlsDoc {
    #[serde(default)]
    pub order_urls: Vec<String>,
}

/// Full order detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderDoc {
    pub merchant_order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_order_id: Option<String>,
    pub order_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_placed_date: Option<MarketDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_shipping_carrier: Option<String>,
    pub shipping_to: AddressDoc,
    pub order_total: Money,
    #[serde(default)]
    pub order_items: Vec<OrderItemDoc>,
}

/// One ordered line item.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderItemDoc {
    pub order_item_id: String,
    pub merchant_sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub request_order_quantity: u32,
    pub item_price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_node: Option<String>,
}

/// Parse an inbound order detail document.
///
/// The poll token is not repeated inside the document, so the caller
/// supplies it.
///
/// # Errors
///
/// Returns an [`ApiError`] when a status token is unrecognized or the
/// document violates entity invariants.
pub fn order_from_doc(token: &str, doc: OrderDoc) -> Result<Order, ApiError> {
    let status: OrderStatus = doc.order_status.parse()?;
    let destination = address_from_doc(&doc.shipping_to)?;

    let mut builder = Order::builder()
        .order_token(token)
        .merchant_order_id(doc.merchant_order_id)
        .status(status)
        .destination(destination)
        .order_total(doc.order_total);

    if let Some(alt) = doc.alt_order_id {
        builder = builder.alt_order_id(alt);
    }
    if let Some(placed) = doc.order_placed_date {
        builder = builder.placed_date(placed);
    }
    if let Some(raw) = doc.request_shipping_carrier.as_deref() {
        let carrier: ShippingCarrier = raw.parse()?;
        builder = builder.requested_carrier(carrier);
    }
    for item in doc.order_items {
        builder = builder.item(order_item_from_doc(item)?);
    }

    builder.build().map_err(doc_invalid("order"))
}

fn order_item_from_doc(doc: OrderItemDoc) -> Result<OrderItem, ApiError> {
    let mut builder = OrderItem::builder()
        .order_item_id(doc.order_item_id)
        .merchant_sku(doc.merchant_sku)
        .quantity_ordered(doc.request_order_quantity)
        .unit_price(doc.item_price);
    if let Some(title) = doc.title {
        builder = builder.title(title);
    }
    if let Some(node) = doc.fulfillment_node {
        builder = builder.fulfillment_node(node);
    }
    builder.build().map_err(doc_invalid("order item"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "merchant_order_id": "mo-5512",
        "alt_order_id": "po-1187",
        "order_status": "ready",
        "order_placed_date": "2017-06-01T09:30:00.000-07:00",
        "request_shipping_carrier": "UPS",
        "shipping_to": {
            "address1": "42 Mercantile Way",
            "city": "Harborton",
            "state": "NY",
            "zip_code": "10013"
        },
        "order_total": "74.97",
        "order_items": [
            {
                "order_item_id": "itm-1",
                "merchant_sku": "SKU-A",
                "title": "Walnut Desk Organizer",
                "request_order_quantity": 2,
                "item_price": "24.99",
                "fulfillment_node": "node-east-1"
            },
            {
                "order_item_id": "itm-2",
                "merchant_sku": "SKU-B",
                "request_order_quantity": 1,
                "item_price": "24.99"
            }
        ]
    }"#;

    #[test]
    fn test_order_detail_parses() {
        let doc: OrderDoc = serde_json::from_str(ORDER_JSON).expect("doc");
        let order = order_from_doc("tok-5512", doc).expect("order");
        assert_eq!(order.order_token(), "tok-5512");
        assert_eq!(order.merchant_order_id(), "mo-5512");
        assert_eq!(order.status(), OrderStatus::Ready);
        assert_eq!(order.requested_carrier(), Some(ShippingCarrier::Ups));
        assert_eq!(order.items().len(), 2);
        let first = order.items().first().expect("item");
        assert_eq!(first.quantity_ordered(), 2);
        assert_eq!(order.order_total().to_string(), "74.97");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let mut doc: OrderDoc = serde_json::from_str(ORDER_JSON).expect("doc");
        doc.order_status = "teleported".to_string();
        let err = order_from_doc("tok-5512", doc).expect_err("should fail");
        assert!(matches!(err, ApiError::UnknownEnum(_)));
    }

    #[test]
    fn test_unknown_carrier_rejected() {
        let mut doc: OrderDoc = serde_json::from_str(ORDER_JSON).expect("doc");
        doc.request_shipping_carrier = Some("Pony Express".to_string());
        let err = order_from_doc("tok-5512", doc).expect_err("should fail");
        assert!(matches!(err, ApiError::UnknownEnum(_)));
    }

    #[test]
    fn test_empty_items_rejected_as_parse_error() {
        let mut doc: OrderDoc = serde_json::from_str(ORDER_JSON).expect("doc");
        doc.order_items.clear();
        let err = order_from_doc("tok-5512", doc).expect_err("should fail");
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
