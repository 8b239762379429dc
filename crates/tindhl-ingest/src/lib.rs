//! Order export ingestion.
//!
//! Reads the shop's order export (comma separated, double-quote quoted, one
//! header row) into [`RawOrderRecord`](tindhl_model::RawOrderRecord)s.
//!
//! # Features
//!
//! - **Header resolution**: required columns are found by name, in any order
//! - **Fail fast**: a missing column or a row too short to hold one aborts the load
//! - **Pre-flight checks**: file size limit and UTF-16 detection before parsing
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tindhl_ingest::read_orders;
//!
//! let orders = read_orders(Path::new("orders.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, OrderHeader, check_file_size, check_file_size_with_limit, read_orders,
    read_orders_from_reader, validate_encoding,
};
