//! CLI argument definitions for TinDHL.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tindhl",
    version,
    about = "Consolidate shop order exports into one DHL label import",
    long_about = "Convert a shop order export into a single DHL bulk label import file.\n\n\
                  Street lines are split into street name and house number according\n\
                  to the destination country, and country names are mapped to the\n\
                  carrier's three-letter codes.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include recipient names and addresses in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Use this sender config file instead of the one in the user config folder.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an order export (the default when no subcommand is given).
    Convert(ConvertArgs),

    /// List the countries with a known carrier code.
    Countries,

    /// Show the sender config file and its values.
    Config,
}

#[derive(Args, Clone, Debug, Default)]
pub struct ConvertArgs {
    /// Path to the order export CSV (default: orders.csv in the current directory).
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Directory to write TinDHL.csv into (default: the current directory).
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read and convert, print the summary, but do not write the import file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_paths_convert_by_default() {
        let cli = Cli::try_parse_from(["tindhl", "in.csv", "out", "--dry-run"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.convert.input_file, Some(PathBuf::from("in.csv")));
        assert_eq!(cli.convert.output_dir, Some(PathBuf::from("out")));
        assert!(cli.convert.dry_run);
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["tindhl"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.convert.input_file.is_none());
        assert!(cli.convert.output_dir.is_none());
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["tindhl", "countries"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Countries)));

        let cli = Cli::try_parse_from(["tindhl", "config", "--config", "sender.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Config)));
        assert_eq!(cli.config, Some(PathBuf::from("sender.toml")));
    }
}
