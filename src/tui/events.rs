//! # Module: TUI Event Handling
//!
//! ## Responsibility
//! Polls crossterm events and translates keyboard input into app state
//! mutations: tab selection, lead generation, table navigation, help, quit.
//!
//! ## Guarantees
//! - Non-blocking event polling with configurable timeout
//! - No panics on any key combination
//! - Ctrl+C always triggers quit, even with a popup open
//! - While a popup or the help overlay is visible, any other key only dismisses it

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use crate::model::Tab;
use crate::store::GenerationTicket;

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed q or Esc.
    Quit,
    /// User pressed Ctrl+C.
    ForceQuit,
    /// User picked a tab directly (1-5).
    SelectTab(Tab),
    /// Tab / Right.
    NextTab,
    /// Shift+Tab / Left.
    PreviousTab,
    /// User asked for new leads.
    Generate,
    /// User toggled help overlay.
    Help,
    /// Up arrow.
    SelectUp,
    /// Down arrow.
    SelectDown,
    /// A key with no binding of its own.
    OtherKey,
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// Returns `InputEvent::None` on timeout and on any crossterm polling error.
pub fn poll_event(timeout: Duration) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => translate_key(key),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
///
/// # Returns
/// A ticket when the event started a generation round; the caller runs the
/// lead fetch for it and feeds the result back through
/// [`App::finish_generation`].
pub fn apply_event(app: &mut App, event: InputEvent) -> Option<GenerationTicket> {
    if event == InputEvent::ForceQuit {
        app.should_quit = true;
        return None;
    }

    if app.notification.is_some() || app.show_help {
        if !matches!(event, InputEvent::None | InputEvent::Resize(_, _)) {
            app.dismiss();
        }
        return None;
    }

    match event {
        InputEvent::Quit => app.should_quit = true,
        InputEvent::SelectTab(tab) => app.select_tab(tab),
        InputEvent::NextTab => {
            let next = app.store.active_tab().next();
            app.select_tab(next);
        }
        InputEvent::PreviousTab => {
            let prev = app.store.active_tab().previous();
            app.select_tab(prev);
        }
        InputEvent::Generate => return app.request_generation(),
        InputEvent::Help => app.show_help = true,
        InputEvent::SelectUp => app.select_previous_lead(),
        InputEvent::SelectDown => app.select_next_lead(),
        InputEvent::ForceQuit
        | InputEvent::OtherKey
        | InputEvent::Resize(_, _)
        | InputEvent::None => {}
    }
    None
}

/// Translates a crossterm key event to an `InputEvent`.
pub fn translate_key(key: KeyEvent) -> InputEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::ForceQuit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char(c @ '1'..='5') => Tab::from_index(c as usize - '1' as usize)
            .map(InputEvent::SelectTab)
            .unwrap_or(InputEvent::OtherKey),
        KeyCode::Tab | KeyCode::Right => InputEvent::NextTab,
        KeyCode::BackTab | KeyCode::Left => InputEvent::PreviousTab,
        KeyCode::Char('g') | KeyCode::Char('G') => InputEvent::Generate,
        KeyCode::Char('h') | KeyCode::Char('H') => InputEvent::Help,
        KeyCode::Up => InputEvent::SelectUp,
        KeyCode::Down => InputEvent::SelectDown,
        _ => InputEvent::OtherKey,
    }
}
