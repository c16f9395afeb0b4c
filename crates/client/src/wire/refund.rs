//! Refund wire documents.

use serde::{Deserialize, Serialize};
use tradewinds_core::entity::{Refund, RefundItem};
use tradewinds_core::status::{RefundReason, RefundStatus};
use tradewinds_core::types::Money;

use super::common::doc_invalid;
use crate::error::ApiError;

/// Response to a refund status poll.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefundUrlsDoc {
    #[serde(default)]
    pub refund_urls: Vec<String>,
}

/// Full refund detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefundDoc {
    pub merchant_order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_authorization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_refund_id: Option<String>,
    pub refund_status: String,
    #[serde(default)]
    pub refund_items: Vec<RefundItemDoc>,
}

/// Refund creation request.
#[derive(Debug, Serialize)]
pub struct RefundRequestDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_refund_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_authorization_id: Option<String>,
    pub refund_items: Vec<RefundItemDoc>,
}

/// One refunded line item (used inbound and outbound).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundItemDoc {
    pub order_item_id: String,
    pub merchant_sku: String,
    pub refund_quantity: u32,
    pub refund_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Parse an inbound refund detail document; the caller supplies the
/// refund id it was retrieved under.
///
/// # Errors
///
/// Returns an [`ApiError`] when a status or reason token is unrecognized
/// or the document violates entity invariants.
pub fn refund_from_doc(refund_id: &str, doc: RefundDoc) -> Result<Refund, ApiError> {
    let status: RefundStatus = doc.refund_status.parse()?;

    let mut builder = Refund::builder()
        .refund_id(refund_id)
        .merchant_order_id(doc.merchant_order_id)
        .status(status);

    if let Some(ra) = doc.return_authorization_id {
        builder = builder.return_auth_id(ra);
    }
    if let Some(alt) = doc.alt_refund_id {
        builder = builder.alt_refund_id(alt);
    }
    for item in doc.refund_items {
        builder = builder.item(refund_item_from_doc(item)?);
    }

    builder.build().map_err(doc_invalid("refund"))
}

fn refund_item_from_doc(doc: RefundItemDoc) -> Result<RefundItem, ApiError> {
    let reason: RefundReason = doc.refund_reason.parse()?;
    let mut builder = RefundItem::builder()
        .order_item_id(doc.order_item_id)
        .merchant_sku(doc.merchant_sku)
        .quantity(doc.refund_quantity)
        .refund_reason(reason);
    if let Some(amount) = doc.refund_amount {
        builder = builder.refund_amount(amount);
    }
    if let Some(notes) = doc.notes {
        builder = builder.notes(notes);
    }
    builder.build().map_err(doc_invalid("refund item"))
}

fn refund_item_to_doc(item: &RefundItem) -> RefundItemDoc {
    RefundItemDoc {
        order_item_id: item.order_item_id().to_string(),
        merchant_sku: item.merchant_sku().to_string(),
        refund_quantity: item.quantity(),
        refund_reason: item.refund_reason().as_str().to_string(),
        refund_amount: item.refund_amount(),
        notes: item.notes().map(ToOwned::to_owned),
    }
}

/// Render a refund creation request for submission.
#[must_use]
pub fn refund_to_doc(refund: &Refund) -> RefundRequestDoc {
    RefundRequestDoc {
        alt_refund_id: refund.alt_refund_id().map(ToOwned::to_owned),
        return_authorization_id: refund.return_auth_id().map(ToOwned::to_owned),
        refund_items: refund.items().iter().map(refund_item_to_doc).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFUND_JSON: &str = r#"{
        "merchant_order_id": "mo-5512",
        "return_authorization_id": "ra-100",
        "refund_status": "accepted",
        "refund_items": [
            {
                "order_item_id": "itm-1",
                "merchant_sku": "SKU-A",
                "refund_quantity": 1,
                "refund_reason": "item defective",
                "refund_amount": "24.99"
            }
        ]
    }"#;

    #[test]
    fn test_refund_detail_parses() {
        let doc: RefundDoc = serde_json::from_str(REFUND_JSON).expect("doc");
        let refund = refund_from_doc("rf-77", doc).expect("refund");
        assert_eq!(refund.refund_id(), Some("rf-77"));
        assert_eq!(refund.status(), RefundStatus::Accepted);
        let item = refund.items().first().expect("item");
        assert_eq!(item.refund_reason(), RefundReason::ItemDefective);
        assert_eq!(item.refund_amount().expect("amount").to_string(), "24.99");
    }

    #[test]
    fn test_unknown_reason_rejected() {
        let mut doc: RefundDoc = serde_json::from_str(REFUND_JSON).expect("doc");
        if let Some(item) = doc.refund_items.first_mut() {
            item.refund_reason = "buyer remorse".to_string();
        }
        let err = refund_from_doc("rf-77", doc).expect_err("should fail");
        assert!(matches!(err, ApiError::UnknownEnum(_)));
    }

    #[test]
    fn test_request_document_shape() {
        let refund = Refund::builder()
            .merchant_order_id("mo-5512")
            .return_auth_id("ra-100")
            .item(
                RefundItem::builder()
                    .order_item_id("itm-1")
                    .merchant_sku("SKU-A")
                    .quantity(1)
                    .refund_reason(RefundReason::ArrivedLate)
                    .build()
                    .expect("item"),
            )
            .build()
            .expect("refund");

        let json = serde_json::to_value(refund_to_doc(&refund)).expect("serialize");
        assert_eq!(json["return_authorization_id"], "ra-100");
        assert_eq!(json["refund_items"][0]["refund_reason"], "arrived late");
    }
}
