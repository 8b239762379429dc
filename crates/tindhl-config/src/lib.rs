//! Sender profile configuration.
//!
//! The sender block of every label comes from a TOML file in the
//! platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/TinDHL/
//! - Windows: %APPDATA%/TinDHL/config/
//! - Linux: ~/.config/tindhl/
//!
//! ```toml
//! [sender]
//! name = "Danny Default"
//! name2 = "Dannies Co."
//! street = "Rad Rd"
//! "house number" = "666"
//! zipcode = "12345"
//! city = "Tubular Town"
//! country = "USA"
//! email = "DannyDefault@Radmail.com"
//! ```
//!
//! On first run the file does not exist yet. It is then created with
//! placeholder values and the caller is told to stop so the user can fill
//! it in before any labels are produced.

mod error;
mod persistence;

pub use error::{ConfigError, Result};
pub use persistence::{
    CONFIG_FILENAME, Config, ConfigStatus, default_config_path, default_sender, load_config,
    load_or_create, write_default_config,
};
