//! Wire documents and codecs for the marketplace merchant API.
//!
//! Field naming lives here and nowhere else. Inbound documents convert
//! into `tradewinds-core` entities via the `*_from_doc` functions, which
//! surface malformed data as [`ApiError::Parse`](crate::error::ApiError)
//! (or `UnknownEnum`/`Value` for bad tokens and literals); outbound
//! requests convert via the `*_to_doc` functions, which cannot fail
//! because they start from already-validated entities.

mod ack;
mod common;
mod order;
mod refund;
mod returns;
mod shipment;

pub use ack::{AckItemDoc, AckRequestDoc, ack_to_doc};
pub use common::{AddressDoc, address_from_doc, address_to_doc, token_from_url};
pub use order::{OrderDoc, OrderItemDoc, OrderUrlsDoc, order_from_doc};
pub use refund::{
    RefundDoc, RefundItemDoc, RefundRequestDoc, RefundUrlsDoc, refund_from_doc, refund_to_doc,
};
pub use returns::{
    CompleteReturnDoc, ReturnDoc, ReturnItemDoc, ReturnUrlsDoc, complete_return_to_doc,
    return_from_doc,
};
pub use shipment::{ShipmentItemDoc, ShipmentRequestDoc, shipment_to_doc};
