//! Configuration file loading.
//!
//! ## Responsibility
//! Read a TOML file from disk, parse it into a [`DashboardConfig`], and run
//! validation before returning.
//!
//! ## Guarantees
//! - A successfully loaded config is always validated
//! - I/O errors and parse errors are distinguished in the error type
//! - File path is included in every error message

use std::path::Path;

use super::validation::{self, ConfigError};
use super::DashboardConfig;

/// Load a [`DashboardConfig`] from a TOML file.
///
/// # Returns
///
/// - `Ok(DashboardConfig)` if the file is readable, well-formed, and valid.
/// - `Err(ConfigError::Io)` if the file cannot be read.
/// - `Err(ConfigError::Parse)` if the TOML is malformed.
/// - `Err(ConfigError::Validation)` if a range constraint is violated.
pub fn load_from_file(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        file: path.display().to_string(),
        source: e,
    })?;

    load_from_str(&content, &path.display().to_string())
}

/// Load a [`DashboardConfig`] from a TOML string.
///
/// `source_name` identifies the source in error messages.
pub fn load_from_str(content: &str, source_name: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
        file: source_name.to_string(),
        source: e,
    })?;

    check(&config)?;
    Ok(config)
}

/// Validate an already-built config, joining all violations into one error.
///
/// Used after command-line overrides are applied on top of a loaded file.
pub fn check(config: &DashboardConfig) -> Result<(), ConfigError> {
    validation::validate(config).map_err(|errors| {
        ConfigError::Validation(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    })
}
