//! Integration tests for the terminal dashboard.
//!
//! These tests verify cross-module interactions: input events driving app
//! state, full-frame rendering of each tab, and the generation round trip
//! from key press through the simulated lead source back into the store.

mod app_state;
mod generation_flow;
mod render_tabs;

use autoleadgen::tui::app::App;
use autoleadgen::tui::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Renders one frame of `app` and returns the buffer as newline-joined rows.
pub fn buffer_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test: terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("test: draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
