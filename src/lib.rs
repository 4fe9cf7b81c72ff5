//! # autoleadgen
//!
//! AutoLeadGen Pro: a terminal demo dashboard rendering mock lead-generation
//! and client-management data in five tabs.
//!
//! ## Architecture
//!
//! ```text
//! input thread ──InputEvent──▶ event loop ──&App──▶ ui::draw
//!                                 │  ▲
//!                    spawn(fetch) │  │ (ticket, drafts)
//!                                 ▼  │
//!                              LeadSource
//! ```
//!
//! The [`store::ViewStateStore`] is owned by the event loop and is the only
//! mutable state. Lead generation is the single suspension point; its result
//! comes back over a channel and is applied by the loop.

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod model;
pub mod source;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;

pub use config::validation::ConfigError;
pub use config::{DashboardConfig, LogFormat};
pub use model::{Client, Lead, LeadDraft, LeadStatus, Plan, Tab};
pub use source::{DemoLeadSource, LeadSource};
pub use store::{GenerationTicket, StoreEvent, ViewStateStore};

/// Initialise the global tracing subscriber, writing to `log_file`.
///
/// The dashboard owns the terminal, so log lines go to a file instead of
/// stdout. The `LOG_FORMAT` environment variable (`"json"` or `"pretty"`)
/// overrides `format` when set. Filter level is controlled by `RUST_LOG`
/// and defaults to `info`.
///
/// # Errors
///
/// Returns [`DashboardError::Terminal`] if the log file cannot be opened and
/// [`DashboardError::Other`] if a global subscriber is already installed.
pub fn init_tracing(format: LogFormat, log_file: &Path) -> Result<(), DashboardError> {
    let format = match std::env::var("LOG_FORMAT") {
        Ok(v) if v == "json" => LogFormat::Json,
        Ok(v) if v == "pretty" => LogFormat::Pretty,
        _ => format,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_writer(Mutex::new(file))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
    };

    result.map_err(|e| DashboardError::Other(format!("tracing init failed: {e}")))
}

/// Top-level dashboard errors.
///
/// The demo operations themselves cannot fail; these variants cover the
/// generation guard and the process seams (config, terminal, logging).
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A generation round was requested while another is still in flight.
    #[error("lead generation already in progress")]
    GenerationInFlight,

    /// A completion arrived for a round that is not the one in flight.
    #[error("generation ticket {got} does not match the round in flight ({expected:?})")]
    StaleTicket {
        /// Round currently in flight, if any.
        expected: Option<u64>,
        /// Round carried by the rejected ticket.
        got: u64,
    },

    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal or log file I/O failed.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}
