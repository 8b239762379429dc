//! Order export reading.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord};
use tindhl_model::RawOrderRecord;

use crate::error::{IngestError, Result};

use super::header::OrderHeader;

/// Maximum file size for CSV loading (100 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| io_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped during header resolution)
    Ok(())
}

/// Reads an order export from disk.
///
/// The whole file is loaded before returning. Any structural problem (no
/// header, a required column missing, a row too short) fails the entire load
/// so that no partial export is ever converted.
pub fn read_orders(path: &Path) -> Result<Vec<RawOrderRecord>> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let orders = read_orders_from_reader(file, path)?;
    tracing::debug!(path = %path.display(), rows = orders.len(), "read order export");
    Ok(orders)
}

/// Reads an order export from any reader.
///
/// `path` is only used to label errors.
pub fn read_orders_from_reader<R: Read>(reader: R, path: &Path) -> Result<Vec<RawOrderRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .quote(b'"')
        .flexible(true)
        .from_reader(reader);

    let header = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    if header.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let columns = OrderHeader::resolve(&header, path)?;

    let mut orders = Vec::new();
    let mut record = StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| csv_error(path, e))?
    {
        let line = record.position().map_or(0, ::csv::Position::line);
        orders.push(columns.order_from(&record, line, path)?);
    }
    Ok(orders)
}

fn io_error(path: &Path, error: io::Error) -> IngestError {
    if error.kind() == io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn csv_error(path: &Path, error: ::csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source: error,
    }
}
