//! One-operand operators and constant producers

use super::{checked, OpResult};
use crate::calculator::errors::Fault;
use std::f64::consts;

pub(crate) fn negate(args: &[f64]) -> OpResult {
    Ok(vec![-args[0]])
}

pub(crate) fn sqrt(args: &[f64]) -> OpResult {
    let x = args[0];
    if x < 0.0 {
        return Err(Fault::Domain);
    }
    Ok(vec![x.sqrt()])
}

pub(crate) fn sqr(args: &[f64]) -> OpResult {
    let x = args[0];
    checked(x * x, args).map(|v| vec![v])
}

pub(crate) fn reciprocal(args: &[f64]) -> OpResult {
    let x = args[0];
    if x == 0.0 {
        return Err(Fault::DivisionByZero);
    }
    checked(1.0 / x, args).map(|v| vec![v])
}

pub(crate) fn ln(args: &[f64]) -> OpResult {
    let x = args[0];
    if x <= 0.0 {
        return Err(Fault::Domain);
    }
    Ok(vec![x.ln()])
}

pub(crate) fn log10(args: &[f64]) -> OpResult {
    let x = args[0];
    if x <= 0.0 {
        return Err(Fault::Domain);
    }
    Ok(vec![x.log10()])
}

pub(crate) fn exp(args: &[f64]) -> OpResult {
    checked(args[0].exp(), args).map(|v| vec![v])
}

pub(crate) fn sin(args: &[f64]) -> OpResult {
    trig(args[0], f64::sin)
}

pub(crate) fn cos(args: &[f64]) -> OpResult {
    trig(args[0], f64::cos)
}

pub(crate) fn tan(args: &[f64]) -> OpResult {
    trig(args[0], f64::tan)
}

fn trig(x: f64, f: fn(f64) -> f64) -> OpResult {
    if x.is_infinite() {
        return Err(Fault::Domain);
    }
    Ok(vec![f(x)])
}

pub(crate) fn pi(_args: &[f64]) -> OpResult {
    Ok(vec![consts::PI])
}

pub(crate) fn euler(_args: &[f64]) -> OpResult {
    Ok(vec![consts::E])
}
