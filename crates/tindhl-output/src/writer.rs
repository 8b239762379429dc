//! CSV writer for the carrier import.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tindhl_model::{SHIPPING_HEADER, ShippingRecord};

use crate::error::{OutputError, Result};

/// Name of the import file inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "TinDHL.csv";

/// Path of the import file for an output directory.
pub fn output_file_path(output_dir: &Path) -> PathBuf {
    output_dir.join(OUTPUT_FILE_NAME)
}

/// Write header and records to any writer.
///
/// Fields are quoted only when they contain a delimiter, quote or line
/// break. Records end in CRLF, as the carrier's own template does.
pub fn write_shipping_csv<W: Write>(writer: W, records: &[ShippingRecord]) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(SHIPPING_HEADER)?;
    for record in records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the import file at `path`, replacing any previous one.
///
/// Uses atomic write (temp file + rename) so the target is either the
/// previous file or the complete new one.
pub fn write_shipping_file(path: &Path, records: &[ShippingRecord]) -> Result<()> {
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    if let Err(source) = write_shipping_csv(&file, records) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::Csv {
            path: temp_path,
            source,
        });
    }

    if let Err(source) = file.sync_all() {
        drop(file);
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::Io {
            operation: "sync",
            path: temp_path,
            source,
        });
    }
    drop(file);

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(path = %path.display(), records = records.len(), "wrote label import");
    Ok(())
}
