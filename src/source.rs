//! Lead source abstraction and the demo implementation.
//!
//! A [`LeadSource`] produces the drafts for one generation round. The store
//! assigns ids; a source only supplies record contents.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::model::{demo_drafts, LeadDraft};

/// Simulated latency of one demo generation round.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Trait for lead providers.
///
/// Implementations must be `Send + Sync` so a round can run on a spawned task
/// behind `Arc<dyn LeadSource>`.
#[async_trait]
pub trait LeadSource: Send + Sync {
    /// Produce the drafts for one round.
    async fn fetch_leads(&self) -> Vec<LeadDraft>;
}

/// Demo source: waits a fixed delay, then returns the two sample drafts.
///
/// The delay cannot fail or be aborted.
#[derive(Debug, Clone)]
pub struct DemoLeadSource {
    /// Simulated network latency.
    pub delay: Duration,
}

impl DemoLeadSource {
    /// Demo source with the default two-second delay.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_GENERATION_DELAY,
        }
    }

    /// Demo source with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DemoLeadSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadSource for DemoLeadSource {
    async fn fetch_leads(&self) -> Vec<LeadDraft> {
        debug!(delay_ms = self.delay.as_millis() as u64, "simulating lead fetch");
        tokio::time::sleep(self.delay).await;
        demo_drafts()
    }
}
