//! Acknowledgment wire documents (outbound only).

use serde::Serialize;
use tradewinds_core::entity::Acknowledgment;
use tradewinds_core::status::{AckStatus, ItemAckStatus};

/// Acknowledgment transition request.
#[derive(Debug, Serialize)]
pub struct AckRequestDoc {
    pub acknowledgement_status: AckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_order_id: Option<String>,
    pub order_items: Vec<AckItemDoc>,
}

/// One line item's acknowledgment.
#[derive(Debug, Serialize)]
pub struct AckItemDoc {
    pub order_item_id: String,
    pub merchant_sku: String,
    pub quantity_ordered: u32,
    pub quantity_to_ship: u32,
    pub ack_status: ItemAckStatus,
}

/// Render an acknowledgment for submission.
#[must_use]
pub fn ack_to_doc(ack: &Acknowledgment) -> AckRequestDoc {
    AckRequestDoc {
        acknowledgement_status: ack.status(),
        alt_order_id: ack.alt_order_id().map(ToOwned::to_owned),
        order_items: ack
            .items()
            .iter()
            .map(|item| AckItemDoc {
                order_item_id: item.order_item_id().to_string(),
                merchant_sku: item.merchant_sku().to_string(),
                quantity_ordered: item.quantity_ordered(),
                quantity_to_ship: item.quantity_acknowledged(),
                ack_status: item.status(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewinds_core::entity::AckItem;

    #[test]
    fn test_ack_document_shape() {
        let ack = Acknowledgment::builder()
            .merchant_order_id("mo-1")
            .status(AckStatus::Accepted)
            .item(
                AckItem::builder()
                    .order_item_id("itm-1")
                    .merchant_sku("SKU-A")
                    .quantity_ordered(2)
                    .quantity_acknowledged(1)
                    .status(ItemAckStatus::Fulfillable)
                    .build()
                    .expect("item"),
            )
            .build()
            .expect("ack");

        let json = serde_json::to_value(ack_to_doc(&ack)).expect("serialize");
        assert_eq!(json["acknowledgement_status"], "accepted");
        assert_eq!(json["order_items"][0]["quantity_to_ship"], 1);
        assert_eq!(json["order_items"][0]["ack_status"], "fulfillable");
        assert!(json.get("alt_order_id").is_none());
    }
}
