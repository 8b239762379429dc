//! Label import file generation.
//!
//! Writes [`ShippingRecord`](tindhl_model::ShippingRecord)s as the carrier's
//! 18-column CSV import. Files are written to a temporary sibling first and
//! renamed into place, so an interrupted run never leaves a half-written
//! import behind.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{OUTPUT_FILE_NAME, output_file_path, write_shipping_csv, write_shipping_file};
