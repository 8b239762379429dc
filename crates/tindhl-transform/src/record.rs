//! Label record assembly.

use tindhl_model::privacy::redact_value;
use tindhl_model::{RawOrderRecord, SenderProfile, ShippingRecord};
use tracing::{debug, info};

use crate::address::{is_unsplittable, split_street};
use crate::registry::CountryRegistry;

/// Outcome of transforming one order row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformed {
    /// The row produced a label.
    Record(ShippingRecord),
    /// The row has no first name and produces no label.
    Skip,
}

impl Transformed {
    pub fn into_record(self) -> Option<ShippingRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Skip => None,
        }
    }

    #[cfg(test)]
    fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

/// Build the label row for one order.
///
/// Rows with an empty first name are skipped; exports contain such rows for
/// headers repeated mid-file and other artifacts. Unknown countries and
/// street lines without a space are accepted as they are.
pub fn transform_record(raw: &RawOrderRecord, sender: &SenderProfile) -> Transformed {
    transform_with(CountryRegistry::global(), raw, sender)
}

pub(crate) fn transform_with(
    registry: &CountryRegistry,
    raw: &RawOrderRecord,
    sender: &SenderProfile,
) -> Transformed {
    if raw.first_name.is_empty() {
        debug!("skipping row without first name");
        return Transformed::Skip;
    }

    let recipient = raw.recipient_name();
    info!(recipient = %redact_value(&recipient), "dumping row");

    let rule = registry.lookup(&raw.country);
    if is_unsplittable(&raw.street) {
        debug!(
            street = %redact_value(&raw.street),
            "street has no house number separator, using full line for both fields"
        );
    }
    let split = split_street(&raw.street, rule.number_position);

    Transformed::Record(ShippingRecord {
        send_name1: sender.name.clone(),
        send_name2: sender.name2.clone(),
        send_street: sender.street.clone(),
        send_housenumber: sender.house_number.clone(),
        send_plz: sender.postal_code.clone(),
        send_city: sender.city.clone(),
        send_country: sender.country.clone(),
        recv_name1: recipient,
        recv_name2: raw.company.clone(),
        recv_street: split.street,
        recv_housenumber: split.house_number,
        recv_plz: raw.postal_code.clone(),
        recv_city: raw.city.clone(),
        recv_country: rule.carrier_code.to_string(),
        product: String::new(),
        coupon: String::new(),
        send_email: sender.email.clone(),
    })
}
