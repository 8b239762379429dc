//! Sender profile.

use serde::{Deserialize, Serialize};

/// Sender identity printed on every label of a run.
///
/// Serialized field names follow the `[sender]` section of the config file,
/// which predates this crate: the house number key contains a space and the
/// postal code is stored as `zipcode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderProfile {
    pub name: String,
    pub name2: String,
    pub street: String,
    #[serde(rename = "house number")]
    pub house_number: String,
    #[serde(rename = "zipcode")]
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub email: String,
}
