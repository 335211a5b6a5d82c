//! Main TUI application state and logic

use super::panes::{self, KeypadButton, StackRenderData, StatusRenderData};
use crate::calculator::{Calculator, DispatchResult, Event};
use crate::config::{Config, MAX_DISPLAY_ROWS};
use crossterm::event::{
    self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::{debug, info};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;

const READY: &str = "Ready!";

/// Help or Aliases text being shown
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub text: String,
    pub scroll: u16,
}

/// The main application state
pub struct App {
    /// The calculator instance
    pub calculator: Calculator,

    pub config: Config,

    /// Result of the last dispatch, drawn on every frame
    pub display: DispatchResult,

    /// Open popup; the next key closes it
    pub popup: Option<Popup>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Keypad buttons as laid out by the last render
    keypad_buttons: Vec<KeypadButton>,
}

impl App {
    pub fn new(calculator: Calculator, config: Config) -> Self {
        App {
            calculator,
            config,
            display: DispatchResult::default(),
            popup: None,
            should_quit: false,
            status_message: String::from(READY),
            keypad_buttons: Vec::new(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("calculator session started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                }
                TermEvent::Mouse(mouse) => self.handle_mouse_event(mouse),
                _ => {}
            }
        }
        info!("calculator session ended");
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let rows = self.config.display_rows.clamp(1, MAX_DISPLAY_ROWS);
        let stack_height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
        let (keypad_width, keypad_height) = if self.config.show_keypad {
            panes::keypad_size(self.config.button_size)
        } else {
            (0, 0)
        };

        // Error line, stack, entry line, keypad, filler, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(stack_height),
                Constraint::Length(3),
                Constraint::Length(keypad_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_error_line(frame, chunks[0], self.display.error.as_deref());

        let recent: Vec<f64> = self.calculator.stack().recent(rows).collect();
        panes::render_stack_pane(
            frame,
            chunks[1],
            StackRenderData {
                recent: &recent,
                depth: self.calculator.stack().len(),
                rows,
            },
        );

        panes::render_entry_pane(frame, chunks[2], &self.display.entry);

        if self.config.show_keypad {
            let keypad_area = Rect::new(
                chunks[3].x,
                chunks[3].y,
                keypad_width.min(chunks[3].width),
                chunks[3].height,
            );
            self.keypad_buttons = panes::layout_buttons(keypad_area, self.config.button_size);
            panes::render_keypad(frame, &self.keypad_buttons);
        } else {
            self.keypad_buttons.clear();
        }

        panes::render_status_bar(
            frame,
            chunks[5],
            StatusRenderData {
                message: &self.status_message,
                depth: self.display.stack.len(),
                memory_set: self.calculator.memory().is_set(),
            },
        );

        if let Some(popup) = &self.popup {
            panes::render_popup(frame, size, &popup.title, &popup.text, popup.scroll);
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(popup) = self.popup.as_mut() {
            match key.code {
                KeyCode::Up => popup.scroll = popup.scroll.saturating_sub(1),
                KeyCode::Down => popup.scroll = popup.scroll.saturating_add(1),
                _ => self.popup = None,
            }
            return;
        }

        if let Some(token) = key_token(key.code) {
            self.handle_token(&token);
        }
    }

    /// Handle mouse events; a left click on a keypad button sends its label
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.popup.is_some() {
            self.popup = None;
            return;
        }
        if let Some(label) = panes::hit_test(&self.keypad_buttons, mouse.column, mouse.row) {
            self.handle_token(label);
        }
    }

    /// Send a raw token to the calculator and update what is displayed
    pub fn handle_token(&mut self, raw: &str) {
        let event = Event::from_token(raw);
        debug!("token {:?} -> {:?}", raw, event);

        if event == Event::Quit {
            self.should_quit = true;
            return;
        }

        let result = self.calculator.dispatch(&event);

        self.status_message = result
            .message
            .clone()
            .unwrap_or_else(|| String::from(READY));

        if let Some(text) = &result.info {
            let title = match event {
                Event::Aliases => "Aliases",
                _ => "Help",
            };
            self.popup = Some(Popup {
                title: title.to_string(),
                text: text.clone(),
                scroll: 0,
            });
        }

        self.display = result;
    }
}

/// Translate a terminal key into the raw token the alias table expects
pub fn key_token(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Enter => Some("Return".to_string()),
        KeyCode::Backspace => Some("BackSpace".to_string()),
        KeyCode::Delete => Some("Delete".to_string()),
        KeyCode::Esc => Some("Escape".to_string()),
        KeyCode::F(n) => Some(format!("F{}", n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Calculator::new(), Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_key_tokens() {
        assert_eq!(key_token(KeyCode::Char('7')).as_deref(), Some("7"));
        assert_eq!(key_token(KeyCode::Enter).as_deref(), Some("Return"));
        assert_eq!(key_token(KeyCode::Backspace).as_deref(), Some("BackSpace"));
        assert_eq!(key_token(KeyCode::F(2)).as_deref(), Some("F2"));
        assert_eq!(key_token(KeyCode::Tab), None);
    }

    #[test]
    fn test_typing_updates_display() {
        let mut app = app();
        for code in [
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Enter,
            KeyCode::Char('3'),
            KeyCode::Char('*'),
        ] {
            press(&mut app, code);
        }
        assert_eq!(app.display.stack, vec![36.0]);
        assert_eq!(app.display.entry, "");
        assert_eq!(app.display.error, None);
    }

    #[test]
    fn test_error_is_transient() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.display.error.as_deref(), Some("Too few arguments"));

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.display.error, None);
        assert_eq!(app.display.entry, "5");
    }

    #[test]
    fn test_memory_message_in_status() {
        let mut app = app();
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.display.error.as_deref(), Some("No memory stored"));

        press(&mut app, KeyCode::F(2));
        assert_eq!(app.status_message, "Memory stored");

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.status_message, READY);
    }

    #[test]
    fn test_help_popup_swallows_next_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.popup.as_ref().map(|p| p.title.as_str()), Some("Help"));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.popup.as_ref().map(|p| p.scroll), Some(1));

        press(&mut app, KeyCode::Char('7'));
        assert!(app.popup.is_none());
        assert_eq!(app.display.entry, "");
    }

    #[test]
    fn test_quit_keys() {
        let mut first = app();
        press(&mut first, KeyCode::Char('q'));
        assert!(first.should_quit);

        let mut second = app();
        press(&mut second, KeyCode::Esc);
        assert!(second.should_quit);
    }

    #[test]
    fn test_mouse_click_on_keypad() {
        let mut app = app();
        app.keypad_buttons = panes::layout_buttons(
            Rect::new(0, 0, 35, 8),
            crate::config::ButtonSize::Normal,
        );
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        // "9" then "Enter" then "+/-"
        app.handle_mouse_event(click(18, 1));
        app.handle_mouse_event(click(0, 5));
        app.handle_mouse_event(click(9, 5));
        assert_eq!(app.display.stack, vec![-9.0]);
    }

    #[test]
    fn test_render_with_oversized_row_count() {
        use ratatui::backend::TestBackend;

        for display_rows in [65534, 65535, 65536, usize::MAX] {
            let config = Config {
                display_rows,
                ..Config::default()
            };
            let mut app = App::new(Calculator::new(), config);
            app.handle_token("7");
            app.handle_token("Return");

            let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
            terminal.draw(|f| app.render(f)).unwrap();
        }
    }

    #[test]
    fn test_render_shows_top_of_stack() {
        use ratatui::backend::TestBackend;

        let mut app = app();
        for token in ["1", "Return", "2", "Return", "3", "Return"] {
            app.handle_token(token);
        }
        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Stack (3)"));
        assert!(screen.contains("1:"));
    }
}
