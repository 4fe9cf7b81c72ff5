//! # Widget: Platform Settings
//!
//! Demo-mode notice and the list of integrations a production build would
//! need. Nothing here is wired to a real service.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::card::{card_block, render_heading};
use crate::tui::app::App;

/// Upgrade steps listed under "Next Steps".
pub const NEXT_STEPS: [&str; 4] = [
    "Sign up for Supabase (free database)",
    "Get Apollo.io API key (10,000 free credits)",
    "Configure Stripe for payments",
    "Set up SendGrid for email automation",
];

/// Renders the settings tab.
pub fn render(f: &mut Frame, area: Rect, _app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
        ])
        .split(area);

    render_heading(f, rows[0], "Platform Settings");

    let muted = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(Span::styled(
            "Your platform is running in demo mode. Upgrade to production to access real lead generation APIs.",
            muted,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Next Steps:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        NEXT_STEPS
            .iter()
            .map(|step| Line::from(Span::styled(format!("  \u{2022} {step}"), muted))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Upgrade to Production ",
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(card_block("Demo Mode Active"));
    f.render_widget(para, rows[2]);
}
