//! Configuration validation.
//!
//! ## Responsibility
//! Range checks on a parsed [`DashboardConfig`] that serde cannot express.
//!
//! ## Guarantees
//! - Every rule has at least one test that triggers it
//! - All violations are collected before returning (no short-circuit)
//! - Error messages include the field path and the invalid value

use super::DashboardConfig;

/// Longest simulated generation delay accepted (ms).
pub const MAX_DELAY_MS: u64 = 60_000;

/// Accepted redraw interval range (ms).
pub const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 10..=1000;

/// Errors arising from configuration parsing, validation, or I/O.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing failed.
    #[error("Parse error in {file}: {source}")]
    Parse {
        /// Path of the file that failed to parse.
        file: String,
        /// Underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// One or more validation rules failed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A specific field has an out-of-range value.
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidField {
        /// Dot-separated field path (e.g., "generation.delay_ms").
        field: String,
        /// String representation of the invalid value.
        value: String,
        /// Human-readable explanation of the constraint.
        reason: String,
    },

    /// File I/O error.
    #[error("IO error reading {file}: {source}")]
    Io {
        /// Path of the file that could not be read.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ConfigError {
    ConfigError::InvalidField {
        field: field.into(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Validate every range constraint on a [`DashboardConfig`].
///
/// # Returns
///
/// - `Ok(())` if all constraints pass.
/// - `Err(Vec<ConfigError>)` with every violation found.
pub fn validate(config: &DashboardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let delay = config.generation.delay_ms;
    if delay == 0 || delay > MAX_DELAY_MS {
        errors.push(invalid(
            "generation.delay_ms",
            delay,
            "must be between 1 and 60000",
        ));
    }

    let rate = config.display.conversion_rate;
    if !(0.0..=100.0).contains(&rate) {
        errors.push(invalid(
            "display.conversion_rate",
            rate,
            "must be between 0.0 and 100.0",
        ));
    }

    let factor = config.display.weekly_growth_factor;
    if !(0.0..=1.0).contains(&factor) {
        errors.push(invalid(
            "display.weekly_growth_factor",
            factor,
            "must be between 0.0 and 1.0",
        ));
    }

    let tick = config.tui.tick_rate_ms;
    if !TICK_RATE_RANGE_MS.contains(&tick) {
        errors.push(invalid(
            "tui.tick_rate_ms",
            tick,
            "must be between 10 and 1000",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
