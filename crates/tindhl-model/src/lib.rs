//! Data model for the TinDHL order-to-label conversion.
//!
//! - **order**: rows of the shop's order export and their column names
//! - **sender**: the sender profile shared by every label in a run
//! - **country**: carrier country rules and house number conventions
//! - **shipping**: rows of the carrier's bulk label import file
//! - **privacy**: redaction of personal data in logs

pub mod country;
pub mod order;
pub mod privacy;
pub mod sender;
pub mod shipping;

pub use country::{CountryRule, NumberPosition};
pub use order::{OrderColumn, RawOrderRecord};
pub use sender::SenderProfile;
pub use shipping::{SHIPPING_HEADER, ShippingRecord};
