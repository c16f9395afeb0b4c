//! Value types for the marketplace domain.
//!
//! Leaf dependencies for every entity: exact-decimal money, offset-aware
//! dates, builder-validated addresses, and the shipping-carrier vocabulary.

pub mod address;
pub mod carrier;
pub mod date;
pub mod money;

pub use address::{Address, AddressBuilder};
pub use carrier::ShippingCarrier;
pub use date::MarketDate;
pub use money::Money;
