//! Numeric entry buffer
//!
//! [`EntryBuffer`] holds the text of a number while it is being typed. Its
//! content always has one of these shapes:
//!
//! ```text
//! (empty)
//! [-]digits[.digits][e[-]digits]
//! ```
//!
//! A failed transition leaves the content untouched.

use crate::calculator::errors::{CalcError, CalcResult};
use log::trace;

const EXPONENT_MARKER: char = 'e';
const POINT: char = '.';
const MINUS: char = '-';

/// The number currently being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
}

impl EntryBuffer {
    pub fn new() -> Self {
        EntryBuffer {
            text: String::new(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_exponent(&self) -> bool {
        self.text.contains(EXPONENT_MARKER)
    }

    /// Append a decimal digit (`0`-`9`)
    pub fn append_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {}", digit);
        self.text.push(char::from(b'0' + digit.min(9)));
        trace!("entry: {:?}", self.text);
    }

    /// Append a decimal point to the mantissa
    pub fn append_point(&mut self) -> CalcResult<()> {
        if self.text.contains(POINT) {
            return Err(CalcError::DuplicatePoint);
        }
        if self.has_exponent() {
            return Err(CalcError::PointInExponent);
        }
        self.text.push(POINT);
        trace!("entry: {:?}", self.text);
        Ok(())
    }

    /// Start the exponent; an empty mantissa reads as `1`
    pub fn append_exponent_marker(&mut self) -> CalcResult<()> {
        if self.has_exponent() {
            return Err(CalcError::DuplicateExponent);
        }
        if self.text.is_empty() {
            self.text.push('1');
        }
        self.text.push(EXPONENT_MARKER);
        trace!("entry: {:?}", self.text);
        Ok(())
    }

    /// Toggle the sign of the segment being edited
    ///
    /// Once an exponent marker is present only the exponent's sign changes.
    pub fn toggle_sign(&mut self) {
        match self.text.find(EXPONENT_MARKER) {
            Some(pos) => {
                let (mantissa, exponent) = self.text.split_at(pos + 1);
                self.text = format!("{}{}", mantissa, negate_text(exponent));
            }
            None => self.text = negate_text(&self.text),
        }
        trace!("entry: {:?}", self.text);
    }

    /// Remove the last character
    pub fn backspace(&mut self) -> Option<char> {
        let removed = self.text.pop();
        trace!("entry: {:?}", self.text);
        removed
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Overwrite the content verbatim (used when restoring memory)
    pub fn replace(&mut self, text: String) {
        self.text = text;
    }

    /// Parse the buffer and reset it
    ///
    /// A dangling exponent (`"3e"`, `"3e-"`) counts as exponent zero. On
    /// failure the buffer keeps its content.
    pub fn commit(&mut self) -> CalcResult<f64> {
        let value = parse_entry(&self.text)?;
        self.text.clear();
        Ok(value)
    }
}

/// Parse entry text the way [`EntryBuffer::commit`] does, without mutating
pub fn parse_entry(text: &str) -> CalcResult<f64> {
    let normalized = normalize_exponent(text);
    normalized
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))
}

fn normalize_exponent(text: &str) -> &str {
    let trimmed = text.strip_suffix(MINUS).unwrap_or(text);
    match trimmed.strip_suffix(EXPONENT_MARKER) {
        Some(mantissa) => mantissa,
        None => text,
    }
}

fn negate_text(text: &str) -> String {
    match text.strip_prefix(MINUS) {
        Some(rest) => rest.to_string(),
        None => format!("{}{}", MINUS, text),
    }
}
