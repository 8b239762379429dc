//! CSV reading utilities.

mod header;
mod reader;

pub use header::OrderHeader;
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_orders,
    read_orders_from_reader, validate_encoding,
};
