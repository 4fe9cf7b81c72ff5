//! # Widget: Card Helpers
//!
//! Shared building blocks: the bordered card block, section headings, and
//! number formatting used by more than one tab.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Orange accent; the 16-color palette has none.
pub const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Purple accent.
pub const PURPLE: Color = Color::Rgb(139, 92, 246);

/// Bordered card with a bold title.
pub fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Renders a one-line section heading.
pub fn render_heading(f: &mut Frame, area: Rect, text: &str) {
    let heading = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(heading, area);
}

/// Formats `n` with comma thousands separators, e.g. `4200` → `"4,200"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
