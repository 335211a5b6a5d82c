//! Canonical events and the alias table
//!
//! Raw tokens from the front end (key names such as `KP_Add` or `BackSpace`,
//! typed characters, keypad button labels) go through two steps:
//!
//! 1. [`canonicalize`] maps the token through the alias table. Tokens that are
//!    not aliases pass through unchanged.
//! 2. [`Event::resolve`] turns the canonical identifier into an [`Event`], so
//!    the calculator dispatches on an enum instead of comparing strings.

use super::ops::{registry, Operator};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Canonical identifiers of the built-in commands
pub mod ids {
    pub const POINT: &str = ".";
    pub const EXPONENT: &str = "EEX";
    pub const ENTER: &str = "Enter";
    pub const CLEAR: &str = "Clear";
    pub const DROP: &str = "Drop";
    pub const TOGGLE_SIGN: &str = "+/-";
    pub const SWAP: &str = "Swap";
    pub const SAVE: &str = "Save";
    pub const LOAD: &str = "Load";
    pub const CLEAR_MEMORY: &str = "ClrMem";
    pub const HELP: &str = "Help";
    pub const ALIASES: &str = "Aliases";
    pub const QUIT: &str = "Quit";
}

/// Raw token to canonical identifier, in help-text order
const ALIASES: &[(&str, &str)] = &[
    ("plus", "+"),
    ("KP_Add", "+"),
    ("minus", "-"),
    ("KP_Subtract", "-"),
    ("asterisk", "*"),
    ("KP_Multiply", "*"),
    ("slash", "/"),
    ("KP_Divide", "/"),
    ("asciicircum", "^"),
    ("q", ids::QUIT),
    ("Q", ids::QUIT),
    ("Escape", ids::QUIT),
    ("Return", ids::ENTER),
    ("KP_Enter", ids::ENTER),
    ("\r", ids::ENTER),
    ("\n", ids::ENTER),
    ("Delete", ids::CLEAR),
    ("c", ids::CLEAR),
    ("C", ids::CLEAR),
    ("d", ids::DROP),
    ("D", ids::DROP),
    ("BackSpace", ids::DROP),
    ("s", ids::SWAP),
    ("S", ids::SWAP),
    ("m", ids::TOGGLE_SIGN),
    ("M", ids::TOGGLE_SIGN),
    ("period", ids::POINT),
    ("KP_Decimal", ids::POINT),
    ("e", ids::EXPONENT),
    ("E", ids::EXPONENT),
    ("h", ids::HELP),
    ("H", ids::HELP),
    ("F1", ids::HELP),
    ("?", ids::HELP),
    ("a", ids::ALIASES),
    ("A", ids::ALIASES),
    ("F2", ids::SAVE),
    ("F3", ids::LOAD),
    ("F4", ids::CLEAR_MEMORY),
    ("r", "sqrt"),
    ("w", "sqr"),
    ("i", "1/x"),
    ("l", "ln"),
    ("L", "log"),
    ("x", "exp"),
    ("n", "sin"),
    ("o", "cos"),
    ("t", "tan"),
    ("p", "pi"),
    ("e^1", "const_e"),
];

/// Read-only raw-token lookup
#[derive(Debug)]
pub struct AliasTable {
    map: FxHashMap<&'static str, &'static str>,
}

impl AliasTable {
    fn build() -> Self {
        AliasTable {
            map: ALIASES.iter().copied().collect(),
        }
    }

    pub fn get(&self, raw: &str) -> Option<&'static str> {
        self.map.get(raw).copied()
    }

    /// All aliases in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        ALIASES.iter().copied()
    }

    /// Raw tokens that map to `canonical`
    pub fn aliases_of(&self, canonical: &str) -> Vec<&'static str> {
        ALIASES
            .iter()
            .filter(|(_, target)| *target == canonical)
            .map(|(raw, _)| *raw)
            .collect()
    }
}

/// The process-wide alias table
pub fn aliases() -> &'static AliasTable {
    static TABLE: OnceLock<AliasTable> = OnceLock::new();
    TABLE.get_or_init(AliasTable::build)
}

/// Apply the alias table; unknown tokens are returned as given
pub fn canonicalize(raw: &str) -> &str {
    match aliases().get(raw) {
        Some(canonical) => canonical,
        None => raw,
    }
}

/// A canonical calculator event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Digit(u8),
    Point,
    Exponent,
    Enter,
    Clear,
    Drop,
    ToggleSign,
    Swap,
    Save,
    Load,
    ClearMemory,
    Help,
    Aliases,
    Quit,
    Operator(&'static Operator),
    Unknown(String),
}

impl Event {
    /// Resolve a canonical identifier
    pub fn resolve(canonical: &str) -> Self {
        match canonical {
            ids::POINT => Event::Point,
            ids::EXPONENT => Event::Exponent,
            ids::ENTER => Event::Enter,
            ids::CLEAR => Event::Clear,
            ids::DROP => Event::Drop,
            ids::TOGGLE_SIGN => Event::ToggleSign,
            ids::SWAP => Event::Swap,
            ids::SAVE => Event::Save,
            ids::LOAD => Event::Load,
            ids::CLEAR_MEMORY => Event::ClearMemory,
            ids::HELP => Event::Help,
            ids::ALIASES => Event::Aliases,
            ids::QUIT => Event::Quit,
            _ => {
                if let Some(digit) = single_digit(canonical) {
                    return Event::Digit(digit);
                }
                match registry().lookup(canonical) {
                    Some(op) => Event::Operator(op),
                    None => Event::Unknown(canonical.to_string()),
                }
            }
        }
    }

    /// Canonicalize and resolve a raw front-end token
    pub fn from_token(raw: &str) -> Self {
        Event::resolve(canonicalize(raw))
    }
}

fn single_digit(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}
