//! # Module: TUI Dashboard
//!
//! ## Responsibility
//! Terminal front end for AutoLeadGen Pro using Ratatui: a header, a
//! five-tab bar, the active tab's section, a footer, and modal popups.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - Clean terminal restore on exit, including on panic (see the binary)
//! - Rendering is a pure function of [`app::App`]
//!
//! ## NOT Responsible For
//! - Demo state semantics (that belongs to `store`)
//! - Simulated latency (that belongs to `source`)

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;
