//! # Module: View State Store
//!
//! ## Responsibility
//! Owns all mutable dashboard state: the active tab, the lead and client
//! collections, the generation-in-flight guard, and the static display
//! metrics. Exposes the derived aggregates the render layer shows.
//!
//! ## Guarantees
//! - At most one generation round is in flight; a second request is rejected
//! - Generated lead ids come from a monotonic counter and never collide.
//!   Ids are never computed as `leads.len() + 1`; that scheme hands the same
//!   id to two rounds that both read the length before either prepends, so
//!   the counter plus the in-flight guard replaces it
//! - Generated leads are prepended as a block, preserving draft order
//! - Aggregates are recomputed on every call, never cached
//! - Every mutation is announced as a [`StoreEvent`] to subscribers
//!
//! ## NOT Responsible For
//! - Sleeping for the simulated latency (that belongs to `source`)
//! - Rendering or notification display (that belongs to `tui`)

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::config::DisplayConfig;
use crate::model::{seed_clients, seed_leads, Client, Lead, LeadDraft, Tab};
use crate::DashboardError;

/// Capacity of the store event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// State change announced by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The active tab changed.
    TabSelected(Tab),
    /// A generation round started.
    GenerationStarted,
    /// A generation round completed and `count` leads were prepended.
    LeadsGenerated {
        /// Number of leads actually added.
        count: usize,
    },
    /// A generation request was refused because a round is in flight.
    GenerationRejected,
}

/// Proof that a generation round was started; required to complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    round: u64,
}

impl GenerationTicket {
    /// Round number this ticket belongs to.
    pub fn round(&self) -> u64 {
        self.round
    }
}

/// The dashboard's single source of truth.
#[derive(Debug)]
pub struct ViewStateStore {
    active_tab: Tab,
    leads: Vec<Lead>,
    clients: Vec<Client>,
    in_flight: Option<u64>,
    next_round: u64,
    /// Next id to assign. Only grows; starts past the largest seeded id.
    next_lead_id: u64,
    display: DisplayConfig,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for ViewStateStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ViewStateStore {
    /// Store seeded with the sample leads and clients and default display values.
    pub fn seeded() -> Self {
        Self::with_display(DisplayConfig::default())
    }

    /// Store seeded with the sample data and the given display values.
    pub fn with_display(display: DisplayConfig) -> Self {
        Self::from_parts(seed_leads(), seed_clients(), display)
    }

    /// Store over arbitrary collections.
    ///
    /// The id counter starts one past the largest lead id present.
    pub fn from_parts(leads: Vec<Lead>, clients: Vec<Client>, display: DisplayConfig) -> Self {
        let next_lead_id = leads.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            active_tab: Tab::default(),
            leads,
            clients,
            in_flight: None,
            next_round: 1,
            next_lead_id,
            display,
            events,
        }
    }

    /// Receiver for every subsequent [`StoreEvent`].
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Currently displayed tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switches the displayed tab.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!(from = ?self.active_tab, to = ?tab, "tab selected");
        }
        self.active_tab = tab;
        self.emit(StoreEvent::TabSelected(tab));
    }

    /// Leads, newest first.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Paying clients.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Whether a generation round is in flight.
    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Static revenue figure from config. Held, but the dashboard shows
    /// [`Self::total_mrr`] instead.
    pub fn total_revenue(&self) -> u64 {
        self.display.total_revenue
    }

    /// Static conversion rate (percent) held for display.
    pub fn conversion_rate(&self) -> f64 {
        self.display.conversion_rate
    }

    /// Sum of monthly recurring revenue over all clients.
    pub fn total_mrr(&self) -> u64 {
        self.clients.iter().map(|c| c.mrr).sum()
    }

    /// Number of lead records.
    pub fn total_leads_generated(&self) -> usize {
        self.leads.len()
    }

    /// The "+N this week" figure: floor of lead count times the growth factor.
    pub fn leads_this_week(&self) -> usize {
        (self.leads.len() as f64 * self.display.weekly_growth_factor).floor() as usize
    }

    /// Starts a generation round.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::GenerationInFlight`] if a round is already in
    /// flight. State is left untouched in that case.
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, DashboardError> {
        if let Some(round) = self.in_flight {
            warn!(round, "generation requested while a round is in flight");
            self.emit(StoreEvent::GenerationRejected);
            return Err(DashboardError::GenerationInFlight);
        }

        let round = self.next_round;
        self.next_round += 1;
        self.in_flight = Some(round);
        info!(round, "lead generation started");
        self.emit(StoreEvent::GenerationStarted);
        Ok(GenerationTicket { round })
    }

    /// Finishes the round `ticket` belongs to, prepending `drafts`.
    ///
    /// Ids are assigned in draft order, so the first draft gets the lowest
    /// id and ends up first in the list.
    ///
    /// # Returns
    ///
    /// The number of leads added.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::StaleTicket`] if `ticket` is not the round in
    /// flight. State is left untouched in that case.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        drafts: Vec<LeadDraft>,
    ) -> Result<usize, DashboardError> {
        if self.in_flight != Some(ticket.round) {
            return Err(DashboardError::StaleTicket {
                expected: self.in_flight,
                got: ticket.round,
            });
        }

        let count = drafts.len();
        let mut fresh: Vec<Lead> = Vec::with_capacity(count + self.leads.len());
        for d in drafts {
            fresh.push(d.into_lead(self.next_lead_id));
            self.next_lead_id += 1;
        }
        fresh.append(&mut self.leads);
        self.leads = fresh;
        self.in_flight = None;

        info!(
            round = ticket.round,
            count,
            total = self.leads.len(),
            "lead generation completed"
        );
        self.emit(StoreEvent::LeadsGenerated { count });
        Ok(count)
    }

    fn emit(&self, event: StoreEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
