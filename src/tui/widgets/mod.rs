//! # Module: TUI Widgets
//!
//! ## Responsibility
//! One renderer per tab, plus the popups. Each widget is a pure function
//! that takes app state and a layout rect and renders into a frame.
//!
//! ## Guarantees
//! - All widgets handle an empty lead or client list gracefully
//! - No widget panics on any area size, including zero
//! - Card styling is shared through `card`

pub mod analytics;
pub mod card;
pub mod clients;
pub mod dashboard;
pub mod leads;
pub mod popup;
pub mod settings;
