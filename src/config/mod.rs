//! # Module: Dashboard Configuration
//!
//! ## Responsibility
//! Parse and validate the optional TOML file that tunes the demo:
//! ```text
//! autoleadgen --config dashboard.toml
//! ```
//!
//! ## Guarantees
//! - Every section and field has a default; an empty file is a valid config
//! - Validated: semantic range checks run before a config is accepted
//! - Schema-exportable: JSON Schema output enables IDE autocomplete
//!
//! ## NOT Responsible For
//! - Applying display values to state (that belongs to `store`)
//! - Installing the log subscriber (that belongs to `init_tracing`)

pub mod loader;
pub mod validation;

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ── Default value functions ──────────────────────────────────────────────

fn default_delay_ms() -> u64 {
    2000
}

fn default_total_revenue() -> u64 {
    4200
}

fn default_conversion_rate() -> f64 {
    12.5
}

fn default_weekly_growth_factor() -> f64 {
    0.15
}

fn default_tick_rate_ms() -> u64 {
    100
}

// ── Top-level config ─────────────────────────────────────────────────────

/// Root configuration for a dashboard session.
///
/// # Example
///
/// ```toml
/// [generation]
/// delay_ms = 2000
///
/// [display]
/// total_revenue = 4200
/// conversion_rate = 12.5
/// weekly_growth_factor = 0.15
///
/// [tui]
/// tick_rate_ms = 100
///
/// [observability]
/// log_format = "pretty"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Lead generation timing.
    pub generation: GenerationConfig,
    /// Static display figures.
    pub display: DisplayConfig,
    /// Terminal loop tuning.
    pub tui: TuiConfig,
    /// Logging.
    pub observability: ObservabilityConfig,
}

/// Lead generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GenerationConfig {
    /// Simulated latency of one generation round (ms).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl GenerationConfig {
    /// The delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Figures the store holds for display without deriving them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DisplayConfig {
    /// Static revenue figure; held by the store, not rendered.
    #[serde(default = "default_total_revenue")]
    pub total_revenue: u64,
    /// Conversion rate in percent.
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: f64,
    /// Multiplier applied to the lead count for the "+N this week" figure.
    #[serde(default = "default_weekly_growth_factor")]
    pub weekly_growth_factor: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            total_revenue: default_total_revenue(),
            conversion_rate: default_conversion_rate(),
            weekly_growth_factor: default_weekly_growth_factor(),
        }
    }
}

/// Terminal loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TuiConfig {
    /// Redraw interval (ms).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl TuiConfig {
    /// The tick rate as a [`Duration`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ObservabilityConfig {
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable log output.
    #[default]
    Pretty,
    /// Structured JSON log output for machine consumption.
    Json,
}

/// Export the JSON Schema for [`DashboardConfig`].
///
/// # Errors
///
/// Returns `serde_json::Error` if schema serialization fails.
pub fn export_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(DashboardConfig);
    serde_json::to_string_pretty(&schema)
}
