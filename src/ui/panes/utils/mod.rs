//! Shared helpers for the panes

pub(crate) mod formatting;

pub(crate) use formatting::{format_general, index_width, stack_rows};
