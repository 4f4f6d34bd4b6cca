// crates/parksense-config/src/config.rs
// ============================================================================
// Module: ParkSense Configuration
// Description: Configuration loading and validation for ParkSense hosts.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: parksense-authority, serde, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section has defaults, so an empty file is valid. Invalid values fail
//! closed instead of being clamped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use parksense_authority::HttpAuthorityConfig;
use parksense_authority::HttpReleaseAuthority;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "parksense.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "PARKSENSE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// ParkSense host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParksenseConfig {
    /// Remote slot authority settings.
    pub authority: HttpAuthorityConfig,
}

impl ParksenseConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The path is `path` when given, else `PARKSENSE_CONFIG`, else
    /// `parksense.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = config_location(path);
        check_path_limits(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config = Self::from_toml(content)?;
        info!(path = %resolved.display(), endpoint = %config.authority.base_url, "config loaded");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a value is out of bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.authority
            .validate()
            .map_err(|err| ConfigError::Invalid(format!("authority: {err}")))
    }

    /// Builds the HTTP release authority described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the authority cannot be built.
    pub fn build_authority(&self) -> Result<HttpReleaseAuthority, ConfigError> {
        HttpReleaseAuthority::new(self.authority.clone())
            .map_err(|err| ConfigError::Invalid(format!("authority: {err}")))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Picks the config file: explicit path, then `PARKSENSE_CONFIG`, then the default name.
fn config_location(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Rejects config paths longer than the total or per-component limits.
fn check_path_limits(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    let oversized =
        path.components().any(|part| part.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH);
    if oversized {
        return Err(ConfigError::Invalid("config path component too long".to_string()));
    }
    Ok(())
}
