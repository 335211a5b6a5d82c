//! Operand stack implementation
//!
//! [`OperandStack`] holds the numbers the calculator operates on. Index 0 is the
//! bottom, the last element is the top.
//!
//! # Ordering
//!
//! Multi-value removals return the removed values deeper-first. With the stack
//! `[a, b, c]` (`c` on top), `pop_n(2)` yields `[b, c]`, which is the argument
//! order a binary operator expects: `b - c`, `b / c`.
//!
//! Every removal checks the required depth up front, so a failed call never
//! leaves the stack partially modified.

use crate::calculator::errors::{CalcError, CalcResult};

/// The calculator's value stack
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack { values: Vec::new() }
    }

    /// Build a stack from values listed bottom-to-top
    pub fn from_values(values: Vec<f64>) -> Self {
        OperandStack { values }
    }

    /// Push a value onto the top
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Push values in order, the last one ending on top
    pub fn push_all<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        self.values.extend(values);
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> CalcResult<f64> {
        self.require(1)?;
        self.values.pop().ok_or(CalcError::InsufficientOperands {
            needed: 1,
            available: 0,
        })
    }

    /// Remove the top `n` values, returned deeper-first
    pub fn pop_n(&mut self, n: usize) -> CalcResult<Vec<f64>> {
        self.require(n)?;
        let split = self.values.len() - n;
        Ok(self.values.split_off(split))
    }

    /// Return the top value without removing it
    pub fn peek(&self) -> CalcResult<f64> {
        self.require(1)?;
        Ok(self.values[self.values.len() - 1])
    }

    /// Return the top `n` values, deeper-first, without removing them
    pub fn peek_n(&self, n: usize) -> CalcResult<Vec<f64>> {
        self.require(n)?;
        Ok(self.values[self.values.len() - n..].to_vec())
    }

    /// Exchange the two topmost values
    pub fn swap_top_two(&mut self) -> CalcResult<()> {
        self.require(2)?;
        let len = self.values.len();
        self.values.swap(len - 1, len - 2);
        Ok(())
    }

    /// Push a copy of the top value
    pub fn duplicate_top(&mut self) -> CalcResult<()> {
        let top = self.peek()?;
        self.values.push(top);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values, bottom-to-top
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The last `k` values, nearest-to-top first
    pub fn recent(&self, k: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().rev().take(k).copied()
    }

    /// Replace the whole content, bottom-to-top
    pub fn replace(&mut self, values: Vec<f64>) {
        self.values = values;
    }

    fn require(&self, needed: usize) -> CalcResult<()> {
        if self.values.len() < needed {
            return Err(CalcError::InsufficientOperands {
                needed,
                available: self.values.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[f64]) -> OperandStack {
        OperandStack::from_values(values.to_vec())
    }

    #[test]
    fn test_pop_n_returns_deeper_first() {
        let mut stack = stack_of(&[1.0, 2.0, 3.0]);
        assert_eq!(stack.peek_n(2).unwrap(), vec![2.0, 3.0]);
        assert_eq!(stack.len(), 3);

        assert_eq!(stack.pop_n(2).unwrap(), vec![2.0, 3.0]);
        assert_eq!(stack.values(), &[1.0]);
    }

    #[test]
    fn test_pop_n_is_all_or_nothing() {
        let mut stack = stack_of(&[1.0, 2.0]);
        let err = stack.pop_n(3).unwrap_err();

        assert_eq!(
            err,
            CalcError::InsufficientOperands {
                needed: 3,
                available: 2
            }
        );
        assert_eq!(stack.values(), &[1.0, 2.0]);

        assert!(stack.pop_n(2).is_ok());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_n_zero_is_empty() {
        let mut stack = OperandStack::new();
        assert!(stack.pop_n(0).unwrap().is_empty());
    }

    #[test]
    fn test_pop_and_peek_on_empty() {
        let mut stack = OperandStack::new();
        assert!(stack.pop().is_err());
        assert!(stack.peek().is_err());
        assert!(stack.duplicate_top().is_err());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_swap_top_two() {
        let mut stack = stack_of(&[1.0, 2.0, 3.0]);
        stack.swap_top_two().unwrap();
        assert_eq!(stack.values(), &[1.0, 3.0, 2.0]);

        let mut short = stack_of(&[1.0]);
        assert!(short.swap_top_two().is_err());
        assert_eq!(short.values(), &[1.0]);
    }

    #[test]
    fn test_duplicate_and_clear() {
        let mut stack = stack_of(&[7.0]);
        stack.duplicate_top().unwrap();
        assert_eq!(stack.values(), &[7.0, 7.0]);

        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_all_keeps_order() {
        let mut stack = stack_of(&[1.0]);
        stack.push_all([2.0, 3.0]);
        assert_eq!(stack.peek().unwrap(), 3.0);
        assert_eq!(stack.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_recent_is_nearest_first() {
        let stack = stack_of(&[1.0, 2.0, 3.0, 4.0]);
        let recent: Vec<f64> = stack.recent(2).collect();
        assert_eq!(recent, vec![4.0, 3.0]);

        let all: Vec<f64> = stack.recent(10).collect();
        assert_eq!(all.len(), 4);
    }
}
