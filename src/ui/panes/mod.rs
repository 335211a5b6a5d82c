//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`stack`]: numbered stack rows, row 1 being the top of the stack
//! - [`entry`]: the error line and the right-aligned entry line
//! - [`keypad`]: the clickable button grid
//! - [`status`]: status bar with keybindings and the memory indicator
//! - [`popup`]: centered box for Help and Aliases text
//! - `utils`: number formatting shared by the panes
//!
//! Each pane exports a `render_*` function taking the frame, its area and the
//! data it shows. None of them hold state.

mod utils;

pub mod entry;
pub mod keypad;
pub mod popup;
pub mod stack;
pub mod status;

pub use entry::{render_entry_pane, render_error_line};
pub use keypad::{hit_test, keypad_size, layout_buttons, render_keypad, KeypadButton};
pub use popup::render_popup;
pub use stack::{render_stack_pane, StackRenderData};
pub use status::{render_status_bar, StatusRenderData};
