//! Two-operand operators
//!
//! Arguments arrive deeper-first: for the stack `[5, 3]` (3 on top) `sub`
//! receives `[5, 3]` and yields `5 - 3`.

use super::{checked, OpResult};
use crate::calculator::errors::Fault;

pub(crate) fn add(args: &[f64]) -> OpResult {
    let (a, b) = (args[0], args[1]);
    checked(a + b, args).map(|v| vec![v])
}

pub(crate) fn sub(args: &[f64]) -> OpResult {
    let (a, b) = (args[0], args[1]);
    checked(a - b, args).map(|v| vec![v])
}

pub(crate) fn mul(args: &[f64]) -> OpResult {
    let (a, b) = (args[0], args[1]);
    checked(a * b, args).map(|v| vec![v])
}

pub(crate) fn div(args: &[f64]) -> OpResult {
    let (a, b) = (args[0], args[1]);
    if b == 0.0 {
        return Err(Fault::DivisionByZero);
    }
    checked(a / b, args).map(|v| vec![v])
}

pub(crate) fn pow(args: &[f64]) -> OpResult {
    let (base, exponent) = (args[0], args[1]);
    if base == 0.0 && exponent < 0.0 {
        return Err(Fault::ZeroToNegativePower);
    }
    // A negative base only has a real power for integral exponents
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(Fault::Domain);
    }
    checked(base.powf(exponent), args).map(|v| vec![v])
}

/// Two outputs: the inputs in reversed order
pub(crate) fn swap(args: &[f64]) -> OpResult {
    Ok(vec![args[1], args[0]])
}
