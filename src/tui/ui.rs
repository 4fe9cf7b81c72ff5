//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Divides the terminal into header, tab bar, body, and footer, and delegates
//! the body to the widget for the active tab. Draws popups last.
//!
//! ## Guarantees
//! - Exactly one tab's section is rendered per frame
//! - Minimum size guard displays a centered message if terminal is too small
//! - No panics during rendering regardless of terminal dimensions

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use super::app::{App, MIN_COLS, MIN_ROWS};
use super::widgets;
use crate::model::Tab;

/// Renders the complete dashboard UI into the given frame.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    if size.width < MIN_COLS || size.height < MIN_ROWS {
        draw_too_small(f, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tab bar
            Constraint::Min(8),    // Active section
            Constraint::Length(2), // Footer
        ])
        .split(size);

    draw_header(f, chunks[0]);
    draw_tabs(f, chunks[1], app.store.active_tab());

    let body = Rect {
        x: chunks[2].x + 1,
        width: chunks[2].width.saturating_sub(2),
        ..chunks[2]
    };
    match app.store.active_tab() {
        Tab::Dashboard => widgets::dashboard::render(f, body, app),
        Tab::Leads => widgets::leads::render(f, body, app),
        Tab::Clients => widgets::clients::render(f, body, app),
        Tab::Analytics => widgets::analytics::render(f, body, app),
        Tab::Settings => widgets::settings::render(f, body, app),
    }

    draw_footer(f, chunks[3], app);

    if app.show_help {
        widgets::popup::render_help(f, size);
    }
    if let Some(notification) = &app.notification {
        widgets::popup::render_notification(f, size, notification);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let clock = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            " AutoLeadGen Pro",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Your Automated Lead Generation & Revenue Platform",
            Style::default().fg(Color::LightBlue),
        )),
    ]);
    f.render_widget(title, inner);
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{clock} "),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right),
        inner,
    );
}

fn draw_tabs(f: &mut Frame, area: Rect, active: Tab) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{} {}", i + 1, t.title()));

    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut hints = vec![Span::styled(
        " [1-5] tabs  [g]enerate  [h]elp  [q]uit ",
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(status) = app.status {
        hints.push(Span::styled(
            format!(" {status} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let footer = Paragraph::new(vec![
        Line::from(hints),
        Line::from(Span::styled(
            "\u{a9} 2025 AutoLeadGen Pro - Your Revenue Generation Platform",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect) {
    let msg = format!("Terminal too small: resize to at least {}x{}", MIN_COLS, MIN_ROWS);
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}
