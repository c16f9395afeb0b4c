//! Shipment wire documents (outbound only).

use serde::Serialize;
use tradewinds_core::entity::Shipment;
use tradewinds_core::types::{MarketDate, ShippingCarrier};

use super::common::{AddressDoc, address_to_doc};

/// Shipment transition request.
#[derive(Debug, Serialize)]
pub struct ShipmentRequestDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_shipment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<ShippingCarrier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_shipment_date: Option<MarketDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<MarketDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_from: Option<AddressDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to: Option<AddressDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rma_number: Option<String>,
    pub shipment_items: Vec<ShipmentItemDoc>,
}

/// One shipped/cancelled line item.
#[derive(Debug, Serialize)]
pub struct ShipmentItemDoc {
    pub order_item_id: String,
    pub merchant_sku: String,
    pub response_shipment_quantity: u32,
    pub response_shipment_cancel_qty: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rma_number: Option<String>,
}

/// Render a shipment for submission.
#[must_use]
pub fn shipment_to_doc(shipment: &Shipment) -> ShipmentRequestDoc {
    ShipmentRequestDoc {
        alt_shipment_id: shipment.alt_shipment_id().map(ToOwned::to_owned),
        carrier: shipment.carrier(),
        tracking_number: shipment.tracking_number().map(ToOwned::to_owned),
        response_shipment_date: shipment.ship_date(),
        expected_delivery_date: shipment.expected_delivery_date(),
        ship_from: shipment.ship_from().map(address_to_doc),
        return_to: shipment.return_to().map(address_to_doc),
        rma_number: shipment.rma_number().map(ToOwned::to_owned),
        shipment_items: shipment
            .items()
            .iter()
            .map(|item| ShipmentItemDoc {
                order_item_id: item.order_item_id().to_string(),
                merchant_sku: item.merchant_sku().to_string(),
                response_shipment_quantity: item.quantity_shipped(),
                response_shipment_cancel_qty: item.quantity_cancelled(),
                rma_number: item.rma_number().map(ToOwned::to_owned),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewinds_core::entity::ShipmentItem;

    #[test]
    fn test_shipment_document_shape() {
        let shipment = Shipment::builder()
            .carrier(ShippingCarrier::FedEx)
            .tracking_number("794644790132")
            .ship_date("2017-06-02T08:00:00.000-07:00".parse().expect("date"))
            .item(
                ShipmentItem::builder()
                    .order_item_id("itm-1")
                    .merchant_sku("SKU-A")
                    .quantity_ordered(2)
                    .split(1, 1)
                    .build()
                    .expect("item"),
            )
            .build()
            .expect("shipment");

        let json = serde_json::to_value(shipment_to_doc(&shipment)).expect("serialize");
        assert_eq!(json["carrier"], "FedEx");
        assert_eq!(json["response_shipment_date"], "2017-06-02T08:00:00.000-07:00");
        assert_eq!(json["shipment_items"][0]["response_shipment_quantity"], 1);
        assert_eq!(json["shipment_items"][0]["response_shipment_cancel_qty"], 1);
        assert!(json.get("alt_shipment_id").is_none());
    }

    #[test]
    fn test_cancel_only_document_carries_alt_id() {
        let shipment = Shipment::builder()
            .alt_shipment_id("CNCL-0000000042")
            .item(
                ShipmentItem::builder()
                    .order_item_id("itm-1")
                    .merchant_sku("SKU-A")
                    .quantity_ordered(2)
                    .cancel_all()
                    .build()
                    .expect("item"),
            )
            .build()
            .expect("shipment");

        let json = serde_json::to_value(shipment_to_doc(&shipment)).expect("serialize");
        assert_eq!(json["alt_shipment_id"], "CNCL-0000000042");
        assert!(json.get("carrier").is_none());
    }
}
