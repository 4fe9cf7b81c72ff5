//! # Widget: Revenue Dashboard
//!
//! ## Responsibility
//! Four metric cards (monthly revenue, total leads, conversion rate, active
//! clients) and the quick actions row.
//!
//! ## Guarantees
//! - Monthly revenue is the live MRR sum, grouped in thousands
//! - "+N this week" is recomputed from the current lead count on every frame
//! - The generate action reads "Generating..." and is dimmed while in flight

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::card::{card_block, format_thousands, render_heading, ORANGE, PURPLE};
use crate::tui::app::App;

/// One metric card's content.
struct Metric {
    title: &'static str,
    value: String,
    color: Color,
    note: String,
}

/// Renders the dashboard tab.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(1),
            Constraint::Length(5), // Metric cards
            Constraint::Length(1),
            Constraint::Length(4), // Quick actions
            Constraint::Min(0),
        ])
        .split(area);

    render_heading(f, chunks[0], "Revenue Dashboard");
    render_metrics(f, chunks[2], app);
    render_quick_actions(f, chunks[4], app);
}

fn metrics(app: &App) -> [Metric; 4] {
    let store = &app.store;
    [
        Metric {
            title: "Monthly Revenue",
            value: format!("${}", format_thousands(store.total_mrr())),
            color: Color::Green,
            note: "+23% this month".into(),
        },
        Metric {
            title: "Total Leads",
            value: store.total_leads_generated().to_string(),
            color: Color::Blue,
            note: format!("+{} this week", store.leads_this_week()),
        },
        Metric {
            title: "Conversion Rate",
            value: format!("{}%", store.conversion_rate()),
            color: PURPLE,
            note: "+2.1% improvement".into(),
        },
        Metric {
            title: "Active Clients",
            value: store.clients().len().to_string(),
            color: ORANGE,
            note: "All paying clients".into(),
        },
    ]
}

fn render_metrics(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (metric, col) in metrics(app).into_iter().zip(cols.iter()) {
        let block = card_block(metric.title);
        let para = Paragraph::new(vec![
            Line::from(Span::styled(
                metric.value,
                Style::default()
                    .fg(metric.color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                metric.note,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(para, *col);
    }
}

/// Label of the generate button for the current state.
pub fn generate_label(generating: bool) -> &'static str {
    if generating {
        "Generating..."
    } else {
        "\u{1f680} Generate New Leads"
    }
}

fn render_quick_actions(f: &mut Frame, area: Rect, app: &App) {
    let generating = app.store.is_generating();
    let generate_style = if generating {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    };

    let actions = Line::from(vec![
        Span::styled("[g] ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {} ", generate_label(generating)), generate_style),
        Span::raw(" "),
        Span::styled(
            " \u{1f4b0} View Revenue Report ",
            Style::default().fg(Color::White).bg(Color::Green),
        ),
        Span::raw(" "),
        Span::styled(
            " \u{1f3af} Find New Prospects ",
            Style::default().fg(Color::White).bg(PURPLE),
        ),
    ]);

    let para = Paragraph::new(vec![Line::from(""), actions]).block(card_block("Quick Actions"));
    f.render_widget(para, area);
}
