//! Stack pane rendering
//!
//! Shows the most recent stack values as numbered rows, row 1 being the top of
//! the stack, with the numbers right-aligned in `%g` style.

use super::utils::{format_general, index_width, stack_rows};
use crate::config::DISPLAY_PRECISION;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the stack pane
pub struct StackRenderData<'a> {
    /// Values nearest the top, nearest-to-top first
    pub recent: &'a [f64],
    /// Full stack depth
    pub depth: usize,
    pub rows: usize,
}

/// Render the stack pane
pub fn render_stack_pane(frame: &mut Frame, area: Rect, data: StackRenderData) {
    let block = Block::default()
        .title(format!(" Stack ({}) ", data.depth))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let content_width = area.width.saturating_sub(2) as usize;
    let idx_width = index_width(data.rows);
    // Reserve space for index + ': '
    let number_width = content_width.saturating_sub(idx_width + 2);

    let lines: Vec<Line> = stack_rows(data.recent, data.rows)
        .into_iter()
        .map(|(row, value)| {
            let number = value
                .map(|v| format_general(v, DISPLAY_PRECISION))
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    format!("{:>width$}: ", row, width = idx_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:>width$}", number, width = number_width),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
