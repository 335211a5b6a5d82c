//! Keypad rendering and hit testing
//!
//! The keypad reproduces the calculator's button grid. Each button's label is
//! the raw token sent when it is clicked, so it goes through the same alias
//! table as the keyboard.

use crate::calculator::Event;
use crate::config::ButtonSize;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Button labels, row by row
pub const KEYPAD: &[&[&str]] = &[
    &["Clear", "Drop", "Swap", "Quit"],
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["E", "0", ".", "+"],
    &["Enter", "+/-", "Help", "^"],
    &["sqrt", "1/x", "ln", "exp"],
    &["Save", "Load", "ClrMem", "Aliases"],
];

/// Gap between buttons in a row
const COLUMN_GAP: u16 = 1;

/// A button placed on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeypadButton {
    pub area: Rect,
    pub label: &'static str,
}

/// Space the keypad needs for the given button size
pub fn keypad_size(size: ButtonSize) -> (u16, u16) {
    let columns = KEYPAD.iter().map(|row| row.len()).max().unwrap_or(0) as u16;
    let width = columns * size.width() + columns.saturating_sub(1) * COLUMN_GAP;
    let height = KEYPAD.len() as u16 * size.height();
    (width, height)
}

/// Lay out the buttons inside `area`; buttons that do not fit are left out
pub fn layout_buttons(area: Rect, size: ButtonSize) -> Vec<KeypadButton> {
    let (width, height) = (size.width(), size.height());
    let mut buttons = Vec::new();

    for (r, row) in KEYPAD.iter().enumerate() {
        let y = area.y + r as u16 * height;
        if y + height > area.y + area.height {
            break;
        }
        for (c, label) in row.iter().enumerate() {
            let x = area.x + c as u16 * (width + COLUMN_GAP);
            if x + width > area.x + area.width {
                break;
            }
            buttons.push(KeypadButton {
                area: Rect::new(x, y, width, height),
                label: *label,
            });
        }
    }
    buttons
}

/// Find the button under a screen position
pub fn hit_test(buttons: &[KeypadButton], column: u16, row: u16) -> Option<&'static str> {
    buttons
        .iter()
        .find(|b| {
            column >= b.area.x
                && column < b.area.x + b.area.width
                && row >= b.area.y
                && row < b.area.y + b.area.height
        })
        .map(|b| b.label)
}

/// Render the keypad buttons
pub fn render_keypad(frame: &mut Frame, buttons: &[KeypadButton]) {
    for button in buttons {
        let style = button_style(button.label);
        // Vertically center the label in tall buttons
        let label_area = Rect::new(
            button.area.x,
            button.area.y + button.area.height / 2,
            button.area.width,
            1,
        );
        frame.render_widget(Paragraph::new("").style(style), button.area);
        frame.render_widget(
            Paragraph::new(button.label)
                .style(style)
                .alignment(Alignment::Center),
            label_area,
        );
    }
}

fn button_style(label: &str) -> Style {
    let base = Style::default().bg(DEFAULT_THEME.button_bg);
    match Event::from_token(label) {
        Event::Quit => Style::default()
            .bg(DEFAULT_THEME.error)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Event::Digit(_) | Event::Point | Event::Exponent => base.fg(DEFAULT_THEME.fg),
        Event::Operator(op) if op.arity_in == 2 => base.fg(DEFAULT_THEME.secondary),
        Event::Operator(_) => base.fg(DEFAULT_THEME.function),
        Event::Save | Event::Load | Event::ClearMemory => base.fg(DEFAULT_THEME.success),
        _ => base.fg(DEFAULT_THEME.primary),
    }
}
