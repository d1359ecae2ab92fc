//! Desktop configuration.
//!
//! TOML-based configuration for the simulated desktop: workspace size,
//! snap and resize tuning, new-window placement, and logging. All sections
//! use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use simdesk_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod file;
pub mod schema;
pub mod validation;

pub use file::ConfigFile;
pub use schema::{DesktopConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use simdesk_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default `config.toml` if none exists.
pub fn load_config() -> Result<DesktopConfig, ConfigError> {
    let config = ConfigFile::platform_default()?.read_or_init()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<DesktopConfig, ConfigError> {
    let config = ConfigFile::at(path).read()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DesktopConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
