//! Loading of [`NormalizerConfig`] from TOML.
//!
//! The default configuration is embedded at compile time from
//! `config/default.toml`. Custom keyword lists can be loaded from any TOML
//! file with the same keys.

use std::path::Path;

use street_address_models::NormalizerConfig;

use crate::ConfigError;

const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// Returns the embedded default configuration.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (this is a compile-time
/// guarantee since the file is embedded).
#[must_use]
pub fn default_config() -> NormalizerConfig {
    from_toml_str(DEFAULT_CONFIG_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse embedded default config: {e}"))
}

/// Parses a configuration from a TOML string.
///
/// Missing keys fall back to their defaults.
///
/// # Errors
///
/// * If the string is not valid TOML or has keys of the wrong type
pub fn from_toml_str(toml_str: &str) -> Result<NormalizerConfig, ConfigError> {
    Ok(toml::de::from_str(toml_str)?)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file contents are not a valid configuration
pub fn load(path: impl AsRef<Path>) -> Result<NormalizerConfig, ConfigError> {
    let path = path.as_ref();
    log::debug!("Loading address normalizer config from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    from_toml_str(&contents)
}
