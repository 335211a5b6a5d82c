//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, key and mouse event loop, popup handling
//! - **[`panes`]** — stateless render functions for each visible pane (error
//!   line, stack, entry line, keypad, status bar, popup)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The UI only translates terminal input into raw tokens and draws the
//! [`DispatchResult`] it gets back. All calculator behaviour lives in
//! [`crate::calculator`].
//!
//! [`DispatchResult`]: crate::calculator::DispatchResult

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
