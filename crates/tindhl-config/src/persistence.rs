//! Config file persistence - load, and create on first run.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tindhl_model::SenderProfile;

use crate::error::{ConfigError, Result};

const APP_QUALIFIER: &str = "";
const APP_ORG: &str = "";
const APP_NAME: &str = "TinDHL";

/// File name of the config inside the configuration directory.
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG_PREAMBLE: &str = "\
# TinDHL sender profile.
# Every label in the import file uses these values as the sender block.
";

/// Contents of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub sender: SenderProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sender: default_sender(),
        }
    }
}

/// Result of [`load_or_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    /// An existing config was read.
    Loaded(Config),
    /// No config existed; a placeholder file was written at this path.
    Created(PathBuf),
}

/// Placeholder sender written on first run.
pub fn default_sender() -> SenderProfile {
    SenderProfile {
        name: "Danny Default".to_string(),
        name2: "Dannies Co.".to_string(),
        street: "Rad Rd".to_string(),
        house_number: "666".to_string(),
        postal_code: "12345".to_string(),
        city: "Tubular Town".to_string(),
        country: "USA".to_string(),
        email: "DannyDefault@Radmail.com".to_string(),
    }
}

/// Get the path to the config file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load the config at `path`.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load the config at `path`, writing the placeholder config if it is missing.
///
/// A freshly created config is never returned as loaded: its values are
/// placeholders and must not end up on real labels.
pub fn load_or_create(path: &Path) -> Result<ConfigStatus> {
    if path.is_file() {
        return load_config(path).map(ConfigStatus::Loaded);
    }
    write_default_config(path)?;
    tracing::info!(path = %path.display(), "created default config");
    Ok(ConfigStatus::Created(path.to_path_buf()))
}

/// Write the placeholder config to `path`.
///
/// Creates the parent directory if it doesn't exist.
pub fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let body = toml::to_string_pretty(&Config::default())?;
    let content = format!("{DEFAULT_CONFIG_PREAMBLE}\n{body}");
    fs::write(path, content).map_err(|e| ConfigError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
