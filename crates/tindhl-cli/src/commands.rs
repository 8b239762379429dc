use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use tindhl_cli::pipeline::{ConvertRequest, ConvertResult, convert};
use tindhl_config::{ConfigError, ConfigStatus, default_config_path, load_or_create};
use tindhl_transform::CountryRegistry;

use crate::cli::ConvertArgs;
use crate::summary::{apply_table_style, print_config_created, print_sender};

/// Default export name looked up in the working directory.
const DEFAULT_INPUT_FILE: &str = "orders.csv";

pub enum ConvertOutcome {
    Converted(ConvertResult),
    /// No config existed; a placeholder was written and nothing was converted.
    ConfigCreated(PathBuf),
}

pub fn run_convert(args: &ConvertArgs, config_path: Option<&Path>) -> Result<ConvertOutcome> {
    let config_path = resolve_config_path(config_path)?;
    let config = match load_or_create(&config_path)
        .with_context(|| format!("load config {}", config_path.display()))?
    {
        ConfigStatus::Loaded(config) => config,
        ConfigStatus::Created(path) => return Ok(ConvertOutcome::ConfigCreated(path)),
    };

    let (input_file, output_dir) = resolve_paths(args)?;
    println!("Using input path:");
    println!("{}", input_file.display());
    println!("Using output path:");
    println!("{}", output_dir.display());
    println!("---");

    let span = info_span!("convert", input_file = %input_file.display());
    let _guard = span.enter();
    let request = ConvertRequest {
        input_file,
        output_dir,
        sender: config.sender,
        dry_run: args.dry_run,
    };
    convert(&request).map(ConvertOutcome::Converted)
}

pub fn run_countries() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Country", "Code", "House number"]);
    apply_table_style(&mut table);
    for (name, rule) in CountryRegistry::global().rules() {
        table.add_row(vec![
            name.to_string(),
            rule.carrier_code.to_string(),
            rule.number_position.to_string(),
        ]);
    }
    println!("{table}");
    println!("Any other country: blank code, house number at the end.");
    Ok(())
}

pub fn run_config(config_path: Option<&Path>) -> Result<()> {
    let config_path = resolve_config_path(config_path)?;
    match load_or_create(&config_path)
        .with_context(|| format!("load config {}", config_path.display()))?
    {
        ConfigStatus::Loaded(config) => print_sender(&config_path, &config.sender),
        ConfigStatus::Created(path) => print_config_created(&path),
    }
    Ok(())
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path().ok_or_else(|| ConfigError::NoConfigDir.into()),
    }
}

fn resolve_paths(args: &ConvertArgs) -> Result<(PathBuf, PathBuf)> {
    let cwd = std::env::current_dir().context("determine current directory")?;
    let input_file = args
        .input_file
        .clone()
        .unwrap_or_else(|| cwd.join(DEFAULT_INPUT_FILE));
    let output_dir = args.output_dir.clone().unwrap_or(cwd);
    Ok((input_file, output_dir))
}
