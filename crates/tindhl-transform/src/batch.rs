//! Whole-export transformation.

use std::collections::BTreeSet;

use tindhl_model::{RawOrderRecord, SenderProfile, ShippingRecord};
use tracing::{info, warn};

use crate::record::{Transformed, transform_with};
use crate::registry::CountryRegistry;

/// Label rows of an export plus what happened along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Label rows in input order.
    pub records: Vec<ShippingRecord>,
    /// Number of input rows seen.
    pub input_count: usize,
    /// Rows dropped for lacking a first name.
    pub skipped: usize,
    /// Country names that had no carrier code, each listed once.
    pub unmapped_countries: BTreeSet<String>,
}

impl TransformReport {
    pub fn written(&self) -> usize {
        self.records.len()
    }
}

/// Transform every order row in input order.
///
/// Rows are neither reordered nor deduplicated. Countries without a carrier
/// code are reported once each at warn level and collected in the report.
pub fn transform_all(orders: &[RawOrderRecord], sender: &SenderProfile) -> TransformReport {
    let registry = CountryRegistry::global();
    let mut report = TransformReport {
        records: Vec::with_capacity(orders.len()),
        input_count: orders.len(),
        ..TransformReport::default()
    };

    for raw in orders {
        match transform_with(registry, raw, sender) {
            Transformed::Record(record) => {
                if !registry.contains(&raw.country)
                    && report.unmapped_countries.insert(raw.country.clone())
                {
                    warn!(country = %raw.country, "no carrier code for country, leaving it blank");
                }
                report.records.push(record);
            }
            Transformed::Skip => report.skipped += 1,
        }
    }

    info!(
        input_count = report.input_count,
        written = report.written(),
        skipped = report.skipped,
        unmapped = report.unmapped_countries.len(),
        "transform complete"
    );
    report
}
