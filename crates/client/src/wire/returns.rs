//! Return wire documents.

use serde::{Deserialize, Serialize};
use tradewinds_core::entity::{CompleteReturnRequest, OrderReturn, ReturnItem};
use tradewinds_core::status::{ChargeFeedback, ReturnFeedback, ReturnStatus};
use tradewinds_core::types::{MarketDate, Money, ShippingCarrier};

use super::common::{AddressDoc, address_from_doc, doc_invalid};
use crate::error::ApiError;

/// Response to a return status poll.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReturnUrlsDoc {
    #[serde(default)]
    pub return_urls: Vec<String>,
}

/// Full return authorization detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReturnDoc {
    pub merchant_order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_return_auth_id: Option<String>,
    pub return_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<MarketDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_return_charge: Option<Money>,
    #[serde(default)]
    pub agree_to_return_charge: bool,
    #[serde(default)]
    pub refund_without_return: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub return_locations: Vec<AddressDoc>,
    #[serde(default)]
    pub return_items: Vec<ReturnItemDoc>,
}

/// One returned line item (used inbound and inside completion requests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnItemDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<String>,
    pub merchant_sku: String,
    pub return_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Return completion transition request.
#[derive(Debug, Serialize)]
pub struct CompleteReturnDoc {
    pub agree_to_return_charge: bool,
    pub return_charge_feedback: ChargeFeedback,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_return_auth_id: Option<String>,
    pub return_items: Vec<ReturnItemDoc>,
}

/// Parse an inbound return detail document; the caller supplies the
/// return authorization id it was retrieved under.
///
/// # Errors
///
/// Returns an [`ApiError`] when a status or feedback token is
/// unrecognized or the document violates entity invariants.
pub fn return_from_doc(return_auth_id: &str, doc: ReturnDoc) -> Result<OrderReturn, ApiError> {
    let status: ReturnStatus = doc.return_status.parse()?;

    let mut builder = OrderReturn::builder()
        .return_auth_id(return_auth_id)
        .merchant_order_id(doc.merchant_order_id)
        .status(status)
        .agree_to_return_charge(doc.agree_to_return_charge)
        .refund_without_return(doc.refund_without_return);

    if let Some(alt) = doc.alt_order_id {
        builder = builder.alt_order_id(alt);
    }
    if let Some(alt) = doc.alt_return_auth_id {
        builder = builder.alt_return_auth_id(alt);
    }
    if let Some(date) = doc.return_date {
        builder = builder.return_date(date);
    }
    if let Some(charge) = doc.merchant_return_charge {
        builder = builder.merchant_return_charge(charge);
    }
    if let Some(raw) = doc.carrier.as_deref() {
        let carrier: ShippingCarrier = raw.parse()?;
        builder = builder.carrier(carrier);
    }
    if let Some(tracking) = doc.tracking_number {
        builder = builder.tracking_number(tracking);
    }
    for location in &doc.return_locations {
        builder = builder.return_location(address_from_doc(location)?);
    }
    for item in doc.return_items {
        builder = builder.item(return_item_from_doc(item)?);
    }

    builder.build().map_err(doc_invalid("return"))
}

fn return_item_from_doc(doc: ReturnItemDoc) -> Result<ReturnItem, ApiError> {
    let mut builder = ReturnItem::builder()
        .merchant_sku(doc.merchant_sku)
        .quantity(doc.return_quantity);
    if let Some(id) = doc.order_item_id {
        builder = builder.order_item_id(id);
    }
    if let Some(raw) = doc.feedback.as_deref() {
        let feedback: ReturnFeedback = raw.parse()?;
        builder = builder.feedback(feedback);
    }
    if let Some(notes) = doc.notes {
        builder = builder.notes(notes);
    }
    builder.build().map_err(doc_invalid("return item"))
}

fn return_item_to_doc(item: &ReturnItem) -> ReturnItemDoc {
    ReturnItemDoc {
        order_item_id: item.order_item_id().map(ToOwned::to_owned),
        merchant_sku: item.merchant_sku().to_string(),
        return_quantity: item.quantity(),
        feedback: item.feedback().map(|f| f.as_str().to_string()),
        notes: item.notes().map(ToOwned::to_owned),
    }
}

/// Render a completion request for submission.
#[must_use]
pub fn complete_return_to_doc(request: &CompleteReturnRequest) -> CompleteReturnDoc {
    CompleteReturnDoc {
        agree_to_return_charge: request.agree_to_return_charge(),
        return_charge_feedback: request.charge_feedback(),
        alt_return_auth_id: request.alt_return_auth_id().map(ToOwned::to_owned),
        return_items: request.items().iter().map(return_item_to_doc).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETURN_JSON: &str = r#"{
        "merchant_order_id": "mo-5512",
        "return_status": "created",
        "return_date": "2017-06-10T14:00:00.000-07:00",
        "merchant_return_charge": "5.00",
        "refund_without_return": false,
        "carrier": "USPS",
        "tracking_number": "9400110200881234567890",
        "return_locations": [
            {
                "address1": "1 Depot Rd",
                "city": "Harborton",
                "state": "NY",
                "zip_code": "10013"
            }
        ],
        "return_items": [
            {
                "order_item_id": "itm-1",
                "merchant_sku": "SKU-A",
                "return_quantity": 1,
                "feedback": "item damaged",
                "notes": "box crushed in transit"
            }
        ]
    }"#;

    #[test]
    fn test_return_detail_parses() {
        let doc: ReturnDoc = serde_json::from_str(RETURN_JSON).expect("doc");
        let ret = return_from_doc("ra-100", doc).expect("return");
        assert_eq!(ret.return_auth_id(), "ra-100");
        assert_eq!(ret.status(), ReturnStatus::Created);
        assert_eq!(ret.carrier(), Some(ShippingCarrier::Usps));
        assert_eq!(ret.return_locations().len(), 1);
        let item = ret.items().first().expect("item");
        assert_eq!(item.feedback(), Some(ReturnFeedback::ItemDamaged));
    }

    #[test]
    fn test_unknown_feedback_rejected() {
        let mut doc: ReturnDoc = serde_json::from_str(RETURN_JSON).expect("doc");
        if let Some(item) = doc.return_items.first_mut() {
            item.feedback = Some("mildly disappointing".to_string());
        }
        let err = return_from_doc("ra-100", doc).expect_err("should fail");
        assert!(matches!(err, ApiError::UnknownEnum(_)));
    }

    #[test]
    fn test_completion_document_shape() {
        let request = CompleteReturnRequest::builder()
            .agree_to_return_charge(true)
            .charge_feedback(ChargeFeedback::Other)
            .item(
                ReturnItem::builder()
                    .merchant_sku("SKU-A")
                    .quantity(1)
                    .feedback(ReturnFeedback::CustomerOpenedItem)
                    .build()
                    .expect("item"),
            )
            .build()
            .expect("request");

        let json = serde_json::to_value(complete_return_to_doc(&request)).expect("serialize");
        assert_eq!(json["agree_to_return_charge"], true);
        assert_eq!(json["return_charge_feedback"], "other");
        assert_eq!(json["return_items"][0]["feedback"], "customer opened item");
    }
}
