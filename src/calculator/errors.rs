//! Error types for the calculator core
//!
//! This module defines [`CalcError`], covering every failure a dispatch can
//! produce, and [`Fault`], the computational failures reported by operator
//! functions.
//!
//! No error is fatal. The [`Calculator`](super::engine::Calculator) converts
//! each one into the transient error string of a
//! [`DispatchResult`](super::engine::DispatchResult) and leaves state as it
//! was before the failed event.

use thiserror::Error;

/// Result alias used throughout the core
pub type CalcResult<T> = Result<T, CalcError>;

/// Failures raised while evaluating an operator function
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("float division by zero")]
    DivisionByZero,

    #[error("0.0 cannot be raised to a negative power")]
    ZeroToNegativePower,

    #[error("math domain error")]
    Domain,

    #[error("Numerical result out of range")]
    Overflow,
}

/// Errors surfaced by the stack, the entry buffer and the dispatcher
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An operation needs more stack depth than is available
    #[error("Too few arguments")]
    InsufficientOperands { needed: usize, available: usize },

    #[error("Only one point allowed")]
    DuplicatePoint,

    #[error("Only one \"e\" allowed")]
    DuplicateExponent,

    /// Exponents are integers
    #[error("No point allowed in exponent")]
    PointInExponent,

    #[error("No swap while editing")]
    SwapWhileEditing,

    #[error("No memory stored")]
    NoMemoryStored,

    /// The operator's function failed; operands were restored
    #[error("{0}")]
    Computation(#[from] Fault),

    /// Buffer content could not be parsed; nothing was pushed
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_display_text() {
        let err = CalcError::InsufficientOperands {
            needed: 2,
            available: 1,
        };
        assert_eq!(err.to_string(), "Too few arguments");
        assert_eq!(CalcError::DuplicateExponent.to_string(), "Only one \"e\" allowed");
        assert_eq!(
            CalcError::from(Fault::DivisionByZero).to_string(),
            "float division by zero"
        );
    }
}
