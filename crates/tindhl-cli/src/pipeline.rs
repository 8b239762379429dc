//! Conversion pipeline: ingest, transform, output.
//!
//! The whole export is read before any row is transformed, and every row is
//! transformed before the import file is written. A failure in any stage
//! aborts the run without touching the output directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use tindhl_ingest::read_orders;
use tindhl_model::SenderProfile;
use tindhl_output::{output_file_path, write_shipping_file};
use tindhl_transform::{TransformReport, transform_all};

/// Everything a conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub sender: SenderProfile,
    /// Skip writing the import file.
    pub dry_run: bool,
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    pub input_file: PathBuf,
    /// Path of the written import file, `None` on a dry run.
    pub output_file: Option<PathBuf>,
    pub input_count: usize,
    pub written: usize,
    pub skipped: usize,
    /// Country names that got a blank carrier code.
    pub unmapped_countries: Vec<String>,
}

/// Check that the input is a file and the output a directory.
pub fn validate_paths(input_file: &Path, output_dir: &Path) -> Result<()> {
    if !input_file.is_file() {
        bail!(
            "the input file {} does not exist",
            input_file.display()
        );
    }
    if !output_dir.is_dir() {
        bail!(
            "the output directory {} does not exist",
            output_dir.display()
        );
    }
    Ok(())
}

/// Run a full conversion.
pub fn convert(request: &ConvertRequest) -> Result<ConvertResult> {
    validate_paths(&request.input_file, &request.output_dir)?;

    let ingest_span = info_span!("ingest", input_file = %request.input_file.display());
    let ingest_start = Instant::now();
    let orders = ingest_span
        .in_scope(|| read_orders(&request.input_file))
        .with_context(|| format!("read order export {}", request.input_file.display()))?;
    info!(
        rows = orders.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let transform_span = info_span!("transform");
    let report = transform_span.in_scope(|| transform_all(&orders, &request.sender));

    let output_file = if request.dry_run {
        info!("dry run, not writing import file");
        None
    } else {
        let path = output_file_path(&request.output_dir);
        let output_span = info_span!("output", output_file = %path.display());
        let output_start = Instant::now();
        output_span
            .in_scope(|| write_shipping_file(&path, &report.records))
            .with_context(|| format!("write label import {}", path.display()))?;
        info!(
            records = report.written(),
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
        Some(path)
    };

    Ok(result_from_report(
        request.input_file.clone(),
        output_file,
        report,
    ))
}

fn result_from_report(
    input_file: PathBuf,
    output_file: Option<PathBuf>,
    report: TransformReport,
) -> ConvertResult {
    ConvertResult {
        input_file,
        output_file,
        input_count: report.input_count,
        written: report.written(),
        skipped: report.skipped,
        unmapped_countries: report.unmapped_countries.into_iter().collect(),
    }
}
