//! The calculator dispatcher
//!
//! [`Calculator`] owns the operand stack, the entry buffer and the memory slot.
//! [`Calculator::dispatch`] applies one [`Event`] and returns a
//! [`DispatchResult`] describing the state afterwards.
//!
//! # Atomicity
//!
//! Each dispatch either applies completely or leaves the state exactly as it
//! found it. Operators pop their operands only after the depth check passed,
//! and push them back in their original positions when the function faults.

use super::errors::{CalcError, CalcResult};
use super::events::{aliases, ids, Event};
use super::ops::{registry, Action, Operator};
use crate::memory::{EntryBuffer, OperandStack};
use crate::snapshot::{MemorySlot, Snapshot};
use log::{debug, trace, warn};
use std::fmt::Write as _;

pub const MEMORY_STORED: &str = "Memory stored";
pub const MEMORY_RESTORED: &str = "Memory restored";
pub const MEMORY_CLEARED: &str = "Memory cleared";

const HELP_TEXT: &str = "\
Keyboard uses the same keys as
the keypad buttons, and these aliases:

Quit: q, Esc
Drop: d, Backspace
Clear: c, Del
Swap: s
+/-: m
EEX: e
Help: h, ?, F1
Aliases: a
Save / Load / ClrMem: F2 / F3 / F4

Functions: r sqrt, w sqr, i 1/x,
l ln, L log, x exp, n sin,
o cos, t tan, p pi

Enter with an empty entry
duplicates the top of the stack.";

/// State after a dispatch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchResult {
    /// Stack contents, bottom-to-top
    pub stack: Vec<f64>,
    /// Entry buffer text
    pub entry: String,
    /// Error to display; `None` clears any earlier one
    pub error: Option<String>,
    /// Confirmation such as "Memory stored"
    pub message: Option<String>,
    /// Informational text for a popup (Help / Aliases)
    pub info: Option<String>,
}

/// What a successful event produced besides state changes
#[derive(Debug, Default)]
struct Outcome {
    message: Option<String>,
    info: Option<String>,
}

impl Outcome {
    fn message(text: &str) -> Self {
        Outcome {
            message: Some(text.to_string()),
            info: None,
        }
    }

    fn info(text: String) -> Self {
        Outcome {
            message: None,
            info: Some(text),
        }
    }
}

/// The RPN calculator state and dispatcher
#[derive(Debug, Default)]
pub struct Calculator {
    stack: OperandStack,
    entry: EntryBuffer,
    memory: MemorySlot,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            stack: OperandStack::new(),
            entry: EntryBuffer::new(),
            memory: MemorySlot::new(),
        }
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn entry(&self) -> &EntryBuffer {
        &self.entry
    }

    pub fn memory(&self) -> &MemorySlot {
        &self.memory
    }

    /// Canonicalize a raw front-end token and dispatch it
    pub fn dispatch_token(&mut self, raw: &str) -> DispatchResult {
        self.dispatch(&Event::from_token(raw))
    }

    /// Apply one event
    pub fn dispatch(&mut self, event: &Event) -> DispatchResult {
        debug!("dispatch {:?}", event);

        let (outcome, error) = match self.apply(event) {
            Ok(outcome) => (outcome, None),
            Err(err) => {
                warn!("{:?} failed: {}", event, err);
                (Outcome::default(), Some(err.to_string()))
            }
        };

        trace!(
            "stack {:?}, entry {:?}",
            self.stack.values(),
            self.entry.contents()
        );

        DispatchResult {
            stack: self.stack.values().to_vec(),
            entry: self.entry.contents().to_string(),
            error,
            message: outcome.message,
            info: outcome.info,
        }
    }

    fn apply(&mut self, event: &Event) -> CalcResult<Outcome> {
        match event {
            Event::Digit(d) => {
                self.entry.append_digit(*d);
            }
            Event::Point => self.entry.append_point()?,
            Event::Exponent => self.entry.append_exponent_marker()?,
            Event::Enter => self.enter()?,
            Event::Clear => {
                if self.entry.is_empty() {
                    self.stack.clear();
                } else {
                    self.entry.clear();
                }
            }
            Event::Drop => {
                if self.entry.is_empty() {
                    self.stack.pop()?;
                } else {
                    self.entry.backspace();
                }
            }
            Event::ToggleSign => {
                if self.entry.is_empty() {
                    if let Some(negate) = registry().lookup(ids::TOGGLE_SIGN) {
                        self.apply_operator(negate)?;
                    }
                } else {
                    self.entry.toggle_sign();
                }
            }
            Event::Swap => {
                if !self.entry.is_empty() {
                    return Err(CalcError::SwapWhileEditing);
                }
                self.stack.swap_top_two()?;
            }
            Event::Save => {
                self.memory.save(Snapshot::capture(&self.stack, &self.entry));
                return Ok(Outcome::message(MEMORY_STORED));
            }
            Event::Load => {
                let snapshot = self.memory.load().ok_or(CalcError::NoMemoryStored)?;
                snapshot.restore_into(&mut self.stack, &mut self.entry);
                return Ok(Outcome::message(MEMORY_RESTORED));
            }
            Event::ClearMemory => {
                self.memory.clear();
                return Ok(Outcome::message(MEMORY_CLEARED));
            }
            Event::Operator(op) => self.apply_operator(op)?,
            Event::Help => return Ok(Outcome::info(help_text())),
            Event::Aliases => return Ok(Outcome::info(aliases_text())),
            // Quitting is up to the front end
            Event::Quit => {}
            Event::Unknown(id) => {
                debug!("ignoring unrecognized event {:?}", id);
            }
        }
        Ok(Outcome::default())
    }

    fn enter(&mut self) -> CalcResult<()> {
        if !self.entry.is_empty() {
            let value = self.entry.commit()?;
            self.stack.push(value);
        } else if !self.stack.is_empty() {
            self.stack.duplicate_top()?;
        }
        Ok(())
    }

    /// Commit any pending entry, then run `op` against the stack
    fn apply_operator(&mut self, op: &Operator) -> CalcResult<()> {
        let func = match op.action {
            Action::Apply(func) => func,
            Action::Structural => {
                // Structural operators have dedicated events
                debug!("structural operator {} reached generic dispatch", op.id);
                return Ok(());
            }
        };

        if !self.entry.is_empty() {
            let value = self.entry.commit()?;
            self.stack.push(value);
        }

        let args = self.stack.pop_n(op.arity_in)?;
        match func(&args) {
            Ok(results) => {
                debug_assert_eq!(results.len(), op.arity_out, "operator {}", op.id);
                self.stack.push_all(results);
                Ok(())
            }
            Err(fault) => {
                self.stack.push_all(args);
                Err(fault.into())
            }
        }
    }
}

/// Keyboard help shown for the Help command
pub fn help_text() -> String {
    HELP_TEXT.to_string()
}

/// Listing of every alias and operator, shown for the Aliases command
pub fn aliases_text() -> String {
    let mut text = String::from("Operators:\n");
    for op in registry().iter() {
        let keys = aliases().aliases_of(op.id);
        let _ = write!(text, "{:>7}  {}", op.id, op.description);
        if !keys.is_empty() {
            let _ = write!(text, " [{}]", keys.join(" "));
        }
        text.push('\n');
    }

    text.push_str("\nAliases:\n");
    for (raw, canonical) in aliases().iter() {
        let _ = writeln!(text, "{:>11} -> {}", printable(raw), canonical);
    }
    text
}

fn printable(raw: &str) -> String {
    raw.escape_debug().to_string()
}
