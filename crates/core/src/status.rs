//! Lifecycle status and reason vocabularies.
//!
//! Every vocabulary is a closed set with a fixed wire token per member.
//! Use the `define_vocab!` macro to declare one; it wires up serde renames,
//! `Display`, and a `FromStr` that rejects unrecognized tokens with
//! [`UnknownEnumValue`](crate::error::UnknownEnumValue) instead of silently
//! defaulting.

/// Declare a closed wire vocabulary.
///
/// Generates the enum with per-variant serde renames, `as_str()`, an `ALL`
/// constant, `Display`, and a failing `FromStr`.
macro_rules! define_vocab {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the vocabulary, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// The wire token for this member.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok(Self::$variant), )+
                    _ => Err($crate::error::UnknownEnumValue::new($kind, s)),
                }
            }
        }
    };
}

define_vocab! {
    /// Lifecycle states of a marketplace order.
    ///
    /// Orders move `Placed -> Ready -> Acknowledged`, then head to
    /// `Complete` via shipment or end in `Cancelled`.
    OrderStatus ("order status") {
        /// Order placed by the customer, not yet released to the merchant.
        Placed => "placed",
        /// Released to the merchant and awaiting acknowledgment.
        Ready => "ready",
        /// Acknowledged by the merchant.
        Acknowledged => "acknowledged",
        /// All items shipped or cancelled.
        Complete => "complete",
        /// Cancelled before completion.
        Cancelled => "cancelled",
    }
}

define_vocab! {
    /// Overall status of an order acknowledgment.
    AckStatus ("acknowledgment status") {
        Accepted => "accepted",
        Rejected => "rejected",
    }
}

define_vocab! {
    /// Per-item status within an acknowledgment.
    ItemAckStatus ("item acknowledgment status") {
        /// The merchant can fulfill the item.
        Fulfillable => "fulfillable",
        /// No inventory for the sku.
        NoInventory => "nonfulfillable - no inventory",
        /// The sku does not exist in the merchant catalog.
        InvalidSku => "nonfulfillable - invalid merchant sku",
    }
}

define_vocab! {
    /// Lifecycle states of a return authorization.
    ReturnStatus ("return status") {
        Created => "created",
        InProgress => "inprogress",
        Completed => "completed",
    }
}

define_vocab! {
    /// Lifecycle states of a refund.
    RefundStatus ("refund status") {
        Created => "created",
        Accepted => "accepted",
        Rejected => "rejected",
    }
}

define_vocab! {
    /// Merchant's reason when disputing or accepting the return charge on a
    /// return completion.
    ChargeFeedback ("charge feedback") {
        Other => "other",
        /// The customer initiated the return outside the processing window.
        OutsideProcessingTime => "outside processing time",
        /// The customer returned a different item.
        WrongItem => "wrong item",
        Fraud => "fraud",
        /// The physical return arrived outside the return window.
        ReturnedOutsideWindow => "returned outside window",
        /// The problem was not caused by the merchant.
        NotMerchantsError => "not merchants error",
    }
}

define_vocab! {
    /// Per-item condition feedback on a return.
    ReturnFeedback ("return feedback") {
        Other => "other",
        ItemDamaged => "item damaged",
        CustomerOpenedItem => "customer opened item",
        NotInOriginalPackaging => "not shipped in original packaging",
        WrongQuantityReceived => "wrong quantity received",
    }
}

define_vocab! {
    /// Per-item reason on a refund request.
    RefundReason ("refund reason") {
        NoLongerWanted => "no longer wanted",
        ItemDamaged => "item damaged",
        ItemDefective => "item defective",
        WrongItemReceived => "wrong item received",
        ArrivedLate => "arrived late",
        NotAsDescribed => "not as described",
        Other => "other",
    }
}
