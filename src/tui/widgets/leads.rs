//! # Widget: Lead Pipeline
//!
//! ## Responsibility
//! Renders the lead table with color-coded score and status badges.
//! Score: >=90 green, >=80 yellow, otherwise gray. Status: Hot red,
//! Warm orange, Cold blue.
//!
//! ## Guarantees
//! - Newest leads appear first (store order)
//! - Handles an empty lead list (header only)
//! - The highlighted row is clamped to the list

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::card::{card_block, render_heading, ORANGE};
use crate::model::LeadStatus;
use crate::tui::app::App;

/// Column headers, in display order.
pub const COLUMNS: [&str; 6] = ["Company", "Email", "Industry", "Score", "Status", "Est. Value"];

/// Color of a score badge.
pub fn score_color(score: u8) -> Color {
    if score >= 90 {
        Color::Green
    } else if score >= 80 {
        Color::Yellow
    } else {
        Color::Gray
    }
}

/// Color of a status badge.
pub fn status_color(status: LeadStatus) -> Color {
    match status {
        LeadStatus::Hot => Color::Red,
        LeadStatus::Warm => ORANGE,
        LeadStatus::Cold => Color::Blue,
    }
}

/// Renders the leads tab.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(chunks[0]);
    render_heading(f, top[0], "Lead Pipeline");

    let action = if app.store.is_generating() {
        "Generating..."
    } else {
        "[g] + Generate Leads"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            action,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right),
        top[1],
    );

    let header = Row::new(COLUMNS.iter().map(|c| {
        Cell::from(*c).style(Style::default().add_modifier(Modifier::BOLD))
    }));

    let rows = app.store.leads().iter().map(|lead| {
        Row::new(vec![
            Cell::from(Span::styled(
                lead.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(
                lead.email.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Cell::from(lead.industry.clone()),
            Cell::from(Span::styled(
                lead.score.to_string(),
                Style::default().fg(score_color(lead.score)),
            )),
            Cell::from(Span::styled(
                lead.status.label(),
                Style::default().fg(status_color(lead.status)),
            )),
            Cell::from(Span::styled(
                lead.value.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
        ])
    });

    // Email absorbs whatever width is left once the fixed columns are placed.
    let widths = [
        Constraint::Length(18),
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(card_block("Leads"))
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .column_spacing(1);

    let selected = if app.store.leads().is_empty() {
        None
    } else {
        Some(app.lead_selected.min(app.store.leads().len() - 1))
    };
    let mut state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, chunks[2], &mut state);
}
