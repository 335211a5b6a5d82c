//! Calculator state containers
//!
//! - [`stack`]: the operand stack with all-or-nothing removals
//! - [`entry`]: the entry buffer holding the number being typed
//!
//! Both are plain owned values. The [`Calculator`](crate::calculator::Calculator)
//! owns one of each and is the only thing that mutates them.

pub mod entry;
pub mod stack;

pub use entry::EntryBuffer;
pub use stack::OperandStack;
