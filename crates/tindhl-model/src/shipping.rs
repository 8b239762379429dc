//! Rows of the carrier's bulk label import.

use serde::Serialize;

/// Header of the import file.
///
/// The first column has an empty name and is always left blank; the carrier's
/// import template carries it and rejects files without it.
pub const SHIPPING_HEADER: [&str; 18] = [
    "",
    "SEND_NAME1",
    "SEND_NAME2",
    "SEND_STREET",
    "SEND_HOUSENUMBER",
    "SEND_PLZ",
    "SEND_CITY",
    "SEND_COUNTRY",
    "RECV_NAME1",
    "RECV_NAME2",
    "RECV_STREET",
    "RECV_HOUSENUMBER",
    "RECV_PLZ",
    "RECV_CITY",
    "RECV_COUNTRY",
    "PRODUCT",
    "COUPON",
    "SEND_EMAIL",
];

/// One label row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ShippingRecord {
    pub send_name1: String,
    pub send_name2: String,
    pub send_street: String,
    pub send_housenumber: String,
    pub send_plz: String,
    pub send_city: String,
    pub send_country: String,
    pub recv_name1: String,
    pub recv_name2: String,
    pub recv_street: String,
    pub recv_housenumber: String,
    pub recv_plz: String,
    pub recv_city: String,
    pub recv_country: String,
    /// Reserved for carrier product metadata, always empty.
    pub product: String,
    /// Reserved for carrier coupon metadata, always empty.
    pub coupon: String,
    pub send_email: String,
}

impl ShippingRecord {
    /// Field values in [`SHIPPING_HEADER`] order, including the blank lead column.
    pub fn fields(&self) -> [&str; 18] {
        [
            "",
            &self.send_name1,
            &self.send_name2,
            &self.send_street,
            &self.send_housenumber,
            &self.send_plz,
            &self.send_city,
            &self.send_country,
            &self.recv_name1,
            &self.recv_name2,
            &self.recv_street,
            &self.recv_housenumber,
            &self.recv_plz,
            &self.recv_city,
            &self.recv_country,
            &self.product,
            &self.coupon,
            &self.send_email,
        ]
    }
}
