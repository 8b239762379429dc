//! Error types for configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or creating the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory to derive the config folder from.
    #[error("could not determine the configuration directory, pass --config")]
    NoConfigDir,

    /// File system operation failed.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or lacks a sender key.
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The default config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
