//! # Module: TUI App State
//!
//! ## Responsibility
//! Wraps the [`ViewStateStore`] with the transient state only the terminal
//! needs: quit flag, help overlay, notification popup, and the lead table
//! selection. Turns store events into user-facing notifications.
//!
//! ## Guarantees
//! - The lead selection always indexes an existing row (or 0 when empty)
//! - Notifications carry the count reported by the store, never a constant
//! - `drain_events()` never blocks and never panics on lagged receivers

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{error, warn};

use crate::model::{LeadDraft, Tab};
use crate::store::{GenerationTicket, StoreEvent, ViewStateStore};

/// Minimum terminal width for the dashboard to render.
pub const MIN_COLS: u16 = 80;

/// Minimum terminal height for the dashboard to render.
pub const MIN_ROWS: u16 = 24;

/// Footer status while a round is in flight.
pub const STATUS_GENERATING: &str = "Generating leads...";

/// Footer status after a generate request was refused.
pub const STATUS_REJECTED: &str = "Generation already in progress";

/// A message shown in a modal popup until the user presses a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Popup body.
    pub message: String,
}

impl Notification {
    /// Completion notice for a generation round that added `count` leads.
    pub fn leads_generated(count: usize) -> Self {
        Self {
            message: format!("\u{1f389} {count} new high-quality leads generated!"),
        }
    }
}

/// Primary application state for the dashboard.
#[derive(Debug)]
pub struct App {
    /// Demo state.
    pub store: ViewStateStore,
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Modal popup, if one is pending.
    pub notification: Option<Notification>,
    /// Highlighted row in the lead table.
    pub lead_selected: usize,
    /// One-line footer status derived from store events.
    pub status: Option<&'static str>,
    events: broadcast::Receiver<StoreEvent>,
}

impl App {
    /// Creates an `App` over `store`, subscribing to its events.
    pub fn new(store: ViewStateStore) -> Self {
        let events = store.subscribe();
        Self {
            store,
            should_quit: false,
            show_help: false,
            notification: None,
            lead_selected: 0,
            status: None,
            events,
        }
    }

    /// Switches tabs.
    pub fn select_tab(&mut self, tab: Tab) {
        self.store.select_tab(tab);
    }

    /// Requests a generation round.
    ///
    /// # Returns
    /// The ticket to hand to the spawned lead fetch, or `None` when a round
    /// is already in flight.
    pub fn request_generation(&mut self) -> Option<GenerationTicket> {
        self.store.begin_generation().ok()
    }

    /// Applies the drafts a lead fetch produced for `ticket`.
    pub fn finish_generation(&mut self, ticket: GenerationTicket, drafts: Vec<LeadDraft>) {
        match self.store.complete_generation(ticket, drafts) {
            Ok(count) => {
                // Rows are prepended; keep the same record highlighted.
                self.lead_selected += count;
                self.clamp_selection();
            }
            Err(e) => error!(error = %e, "discarding generation result"),
        }
    }

    /// Moves the lead selection up one row.
    pub fn select_previous_lead(&mut self) {
        self.lead_selected = self.lead_selected.saturating_sub(1);
    }

    /// Moves the lead selection down one row, stopping at the last lead.
    pub fn select_next_lead(&mut self) {
        let last = self.store.leads().len().saturating_sub(1);
        self.lead_selected = (self.lead_selected + 1).min(last);
    }

    /// Closes any popup or overlay.
    pub fn dismiss(&mut self) {
        self.notification = None;
        self.show_help = false;
    }

    /// Consumes pending store events, updating the footer status and raising
    /// notifications.
    pub fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(StoreEvent::LeadsGenerated { count }) => {
                    self.status = None;
                    self.notification = Some(Notification::leads_generated(count));
                }
                Ok(StoreEvent::GenerationStarted) => self.status = Some(STATUS_GENERATING),
                Ok(StoreEvent::GenerationRejected) => self.status = Some(STATUS_REJECTED),
                Ok(StoreEvent::TabSelected(_)) => {
                    // Drop a stale rejection; keep the in-flight marker.
                    self.status = self.store.is_generating().then_some(STATUS_GENERATING);
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "store events lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    fn clamp_selection(&mut self) {
        let last = self.store.leads().len().saturating_sub(1);
        self.lead_selected = self.lead_selected.min(last);
    }
}
