//! # Widget: Popups
//!
//! ## Responsibility
//! Modal overlays drawn on top of the active tab: the generation notification
//! and the help screen.
//!
//! ## Guarantees
//! - Popups are centered and clamped to the available area
//! - The area under a popup is cleared before drawing

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::Notification;

/// Rect of at most `width`x`height` centered in `area`, leaving a 2-cell margin.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Renders the notification popup.
pub fn render_notification(f: &mut Frame, area: Rect, notification: &Notification) {
    let popup = centered(area, 50, 7);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Notification ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            notification.message.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    f.render_widget(para, popup);
}

/// Renders the help overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered(area, 46, 14);
    f.render_widget(Clear, popup);

    let key = Style::default().fg(Color::DarkGray);
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  AutoLeadGen Pro",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  Keybindings:", Style::default().fg(Color::White))),
        Line::from(Span::styled("    [1-5]      Jump to tab", key)),
        Line::from(Span::styled("    [Tab/\u{2190}\u{2192}]  Cycle tabs", key)),
        Line::from(Span::styled("    [g]        Generate leads", key)),
        Line::from(Span::styled("    [\u{2191}\u{2193}]       Move lead selection", key)),
        Line::from(Span::styled("    [h]        Toggle this help", key)),
        Line::from(Span::styled("    [q] [Esc]  Quit   [Ctrl+C] Force quit", key)),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(help_text).block(block), popup);
}
