//! # Introduction
//!
//! rpncalc is an interactive Reverse Polish Notation calculator. Numbers are
//! typed into an entry line and pushed onto an operand stack; operators take
//! their arguments from the top of the stack and push their results back.
//! The front end is a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Key / click → raw token → alias table → Event → Calculator → DispatchResult → TUI
//! ```
//!
//! 1. [`calculator`] — canonical events, the operator registry and the
//!    [`calculator::Calculator`] dispatcher.
//! 2. [`memory`] — the [`memory::OperandStack`] and the
//!    [`memory::EntryBuffer`] state machine.
//! 3. [`snapshot`] — the single save slot behind Save / Load / ClrMem.
//! 4. [`config`] — command-line options.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use rpncalc::calculator::Calculator;
//!
//! let mut calc = Calculator::new();
//! for token in ["5", "Return", "3", "-"] {
//!     calc.dispatch_token(token);
//! }
//! assert_eq!(calc.stack().values(), &[2.0]);
//! ```

pub mod calculator;
pub mod config;
pub mod memory;
pub mod snapshot;
pub mod ui;
