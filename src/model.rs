//! # Module: Domain Model
//!
//! ## Responsibility
//! Record types shown by the dashboard (leads, clients), the closed tab set,
//! and the fixed sample data the store is seeded from.
//!
//! ## Guarantees
//! - Seed ids are unique and start at 1
//! - `LeadStatus` is independent of `score`; nothing derives one from the other
//!
//! ## NOT Responsible For
//! - Assigning ids to generated leads (that belongs to `store`)
//! - Producing generated drafts on a delay (that belongs to `source`)

use serde::{Deserialize, Serialize};

/// Pipeline temperature of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    /// Ready to buy.
    Hot,
    /// Engaged but not ready.
    Warm,
    /// Little engagement so far.
    Cold,
}

impl LeadStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Warm => "Warm",
            Self::Cold => "Cold",
        }
    }
}

/// Subscription plan of a paying client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    /// Entry plan.
    Starter,
    /// Mid-tier plan.
    Growth,
    /// Top plan.
    Pro,
}

impl Plan {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Growth => "Growth",
            Self::Pro => "Pro",
        }
    }
}

/// A prospective customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Session-unique id.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Industry label.
    pub industry: String,
    /// Quality score, conventionally 0-100.
    pub score: u8,
    /// Pipeline status.
    pub status: LeadStatus,
    /// Estimated deal value, display text only (e.g. "$5,000").
    pub value: String,
}

/// A lead as produced by a lead source, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDraft {
    /// Company name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Industry label.
    pub industry: String,
    /// Quality score, conventionally 0-100.
    pub score: u8,
    /// Pipeline status.
    pub status: LeadStatus,
    /// Estimated deal value, display text only.
    pub value: String,
}

impl LeadDraft {
    /// Attaches `id`, producing a full [`Lead`].
    pub fn into_lead(self, id: u64) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            industry: self.industry,
            score: self.score,
            status: self.status,
            value: self.value,
        }
    }
}

/// A paying account.
///
/// `leads` and `conversion` are display values and are not derived from the
/// lead collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Session-unique id.
    pub id: u64,
    /// Account name.
    pub name: String,
    /// Subscription plan.
    pub plan: Plan,
    /// Monthly recurring revenue in whole currency units.
    pub mrr: u64,
    /// Lead count shown on the client card.
    pub leads: u32,
    /// Conversion rate as display text (e.g. "12%").
    pub conversion: String,
}

/// One of the five mutually exclusive dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    /// Revenue cards and quick actions.
    #[default]
    Dashboard,
    /// Lead pipeline table.
    Leads,
    /// Client cards.
    Clients,
    /// Static analytics tiles.
    Analytics,
    /// Demo-mode notice and upgrade steps.
    Settings,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Leads,
        Tab::Clients,
        Tab::Analytics,
        Tab::Settings,
    ];

    /// Position in [`Tab::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Leads => 1,
            Self::Clients => 2,
            Self::Analytics => 3,
            Self::Settings => 4,
        }
    }

    /// Tab at `index`, or `None` past the end.
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping from Settings to Dashboard.
    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping from Dashboard to Settings.
    pub fn previous(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Title shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Leads => "Leads",
            Self::Clients => "Clients",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}

fn draft(
    name: &str,
    email: &str,
    industry: &str,
    score: u8,
    status: LeadStatus,
    value: &str,
) -> LeadDraft {
    LeadDraft {
        name: name.into(),
        email: email.into(),
        industry: industry.into(),
        score,
        status,
        value: value.into(),
    }
}

/// The five leads every session starts with, ids 1 through 5.
pub fn seed_leads() -> Vec<Lead> {
    [
        draft("TechStart Inc", "contact@techstart.com", "Technology", 95, LeadStatus::Hot, "$5,000"),
        draft("GrowthCorp", "sales@growthcorp.com", "Marketing", 88, LeadStatus::Warm, "$3,200"),
        draft("InnovateLabs", "hello@innovatelabs.com", "Software", 92, LeadStatus::Hot, "$7,500"),
        draft("NextGen Solutions", "info@nextgen.com", "Consulting", 76, LeadStatus::Cold, "$2,100"),
        draft("Digital Dynamics", "team@digitaldynamics.com", "E-commerce", 85, LeadStatus::Warm, "$4,800"),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|(d, id)| d.into_lead(id))
    .collect()
}

/// The three paying clients, ids 1 through 3.
pub fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            name: "Local Dental Practice".into(),
            plan: Plan::Starter,
            mrr: 500,
            leads: 45,
            conversion: "12%".into(),
        },
        Client {
            id: 2,
            name: "Real Estate Agency".into(),
            plan: Plan::Growth,
            mrr: 1200,
            leads: 120,
            conversion: "8%".into(),
        },
        Client {
            id: 3,
            name: "Marketing Consultancy".into(),
            plan: Plan::Pro,
            mrr: 2500,
            leads: 280,
            conversion: "15%".into(),
        },
    ]
}

/// Drafts returned by one demo generation round, in insertion order.
pub fn demo_drafts() -> Vec<LeadDraft> {
    vec![
        draft("BuildCorp", "contact@buildcorp.com", "Construction", 89, LeadStatus::Warm, "$6,200"),
        draft("HealthTech Pro", "sales@healthtech.com", "Healthcare", 94, LeadStatus::Hot, "$8,100"),
    ]
}
