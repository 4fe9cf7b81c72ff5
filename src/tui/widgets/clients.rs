//! # Widget: Client Management
//!
//! ## Responsibility
//! One card per paying client (name, plan, MRR, lead count, conversion) and
//! the "Add New Client" card.
//!
//! ## Guarantees
//! - MRR renders as `$<mrr>/mo` without grouping
//! - Onboarding is display only; no key is bound to it

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::card::{card_block, render_heading};
use crate::model::Client;
use crate::tui::app::App;

/// Height of one client card including borders.
const CARD_HEIGHT: u16 = 4;

/// `"$1200/mo"`.
pub fn mrr_label(client: &Client) -> String {
    format!("${}/mo", client.mrr)
}

/// `"120 leads • 8% conversion"`.
pub fn stats_label(client: &Client) -> String {
    format!("{} leads \u{2022} {} conversion", client.leads, client.conversion)
}

/// Renders the clients tab.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let clients = app.store.clients();

    // Heading, cards, onboarding: 16 rows with the seed set, the body height at 80x24.
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(clients.iter().map(|_| Constraint::Length(CARD_HEIGHT)));
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_heading(f, chunks[0], "Client Management");

    for (client, slot) in clients.iter().zip(chunks.iter().skip(1)) {
        render_card(f, *slot, client);
    }

    let onboard = Paragraph::new(Line::from(Span::styled(
        " + Onboard New Client ",
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )))
    .block(card_block("Add New Client"));
    f.render_widget(onboard, chunks[1 + clients.len()]);
}

fn render_card(f: &mut Frame, area: Rect, client: &Client) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let left = Paragraph::new(vec![
        Line::from(Span::styled(
            client.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} Plan", client.plan.label()),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    let right = Paragraph::new(vec![
        Line::from(Span::styled(
            mrr_label(client),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            stats_label(client),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Right);

    f.render_widget(left, inner);
    f.render_widget(right, inner);
}
