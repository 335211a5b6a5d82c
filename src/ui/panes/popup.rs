//! Centered popup for Help and Aliases text

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render `text` in a bordered box over the middle of `area`
pub fn render_popup(frame: &mut Frame, area: Rect, title: &str, text: &str, scroll: u16) {
    let text_width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let text_height = text.lines().count() as u16;

    let popup = centered(area, text_width + 4, text_height + 2);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_bottom(" any key to close ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let paragraph = Paragraph::new(text.to_string())
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .scroll((scroll, 0));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
