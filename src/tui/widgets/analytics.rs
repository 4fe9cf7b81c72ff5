//! # Widget: Revenue Analytics
//!
//! Two static tiles. The figures are fixed demo copy, not computed.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::card::{card_block, render_heading};
use crate::tui::app::App;

/// Renders the analytics tab.
pub fn render(f: &mut Frame, area: Rect, _app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area);

    render_heading(f, rows[0], "Revenue Analytics");

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    tile(f, cols[0], "Revenue Growth", "\u{1f4c8} +127% Growth", Color::Blue);
    tile(f, cols[1], "Lead Quality Score", "\u{2b50} 4.8/5.0", Color::Green);
}

fn tile(f: &mut Frame, area: Rect, title: &str, figure: &str, color: Color) {
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            figure.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(card_block(title));
    f.render_widget(para, area);
}
