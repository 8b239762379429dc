//! Header resolution for the order export.

use std::path::Path;

use ::csv::StringRecord;
use tindhl_model::{OrderColumn, RawOrderRecord};

use crate::error::{IngestError, Result};

/// Positions of the required columns within an export's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHeader {
    /// Column index per [`OrderColumn::all`] entry.
    indices: Vec<(OrderColumn, usize)>,
}

impl OrderHeader {
    /// Locate every required column in a header row.
    ///
    /// Header cells are compared after trimming whitespace and a leading
    /// byte order mark. When a name appears twice the first one wins.
    pub fn resolve(header: &StringRecord, path: &Path) -> Result<Self> {
        let names: Vec<String> = header.iter().map(normalize_header).collect();
        let mut indices = Vec::with_capacity(OrderColumn::all().len());
        for &column in OrderColumn::all() {
            let idx = names
                .iter()
                .position(|name| name == column.header())
                .ok_or_else(|| IngestError::MissingColumn {
                    column: column.header().to_string(),
                    path: path.to_path_buf(),
                })?;
            indices.push((column, idx));
        }
        Ok(Self { indices })
    }

    #[cfg(test)]
    fn index_of(&self, column: OrderColumn) -> Option<usize> {
        self.indices
            .iter()
            .find(|(candidate, _)| *candidate == column)
            .map(|(_, idx)| *idx)
    }

    /// Build an order row from a data record.
    ///
    /// `line` is the 1-based line number used in error messages. Values are
    /// taken verbatim, without trimming.
    pub fn order_from(
        &self,
        record: &StringRecord,
        line: u64,
        path: &Path,
    ) -> Result<RawOrderRecord> {
        let mut order = RawOrderRecord::default();
        for &(column, idx) in &self.indices {
            let value = record.get(idx).ok_or_else(|| IngestError::MissingField {
                column: column.header().to_string(),
                line,
                path: path.to_path_buf(),
            })?;
            let slot = match column {
                OrderColumn::FirstName => &mut order.first_name,
                OrderColumn::LastName => &mut order.last_name,
                OrderColumn::Company => &mut order.company,
                OrderColumn::Street => &mut order.street,
                OrderColumn::PostalCode => &mut order.postal_code,
                OrderColumn::City => &mut order.city,
                OrderColumn::Country => &mut order.country,
            };
            value.clone_into(slot);
        }
        Ok(order)
    }
}

/// Normalizes a header value by trimming whitespace and a byte order mark.
fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}
