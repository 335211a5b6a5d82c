//! Error line and entry line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the transient error line; empty when there is no error
pub fn render_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    let paragraph = Paragraph::new(error.unwrap_or_default())
        .style(
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// Render the entry buffer, right-aligned like a calculator display
pub fn render_entry_pane(frame: &mut Frame, area: Rect, entry: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let paragraph = Paragraph::new(entry.to_string())
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
