//! Operator registry
//!
//! Every operator the calculator knows is an [`Operator`] record: an
//! identifier, its input and output arity, what it does, and a description used
//! for help text and keypad labels.
//!
//! The registry is built once on first use and shared as `&'static` for the
//! rest of the process. There is no way to add or remove operators at runtime.
//!
//! # Actions
//!
//! - [`Action::Apply`]: a pure function from the popped operands (deeper-first)
//!   to the values to push, in push order. It reports failures as a [`Fault`].
//! - [`Action::Structural`]: the calculator implements the behaviour itself.
//!   Only `Drop` is structural; it is listed here so help text and keypad
//!   rendering see the complete catalog.

pub mod binary;
pub mod unary;

use crate::calculator::errors::Fault;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Values to push, or the reason the operator failed
pub type OpResult = Result<Vec<f64>, Fault>;

/// Signature shared by every applicable operator
pub type OpFn = fn(&[f64]) -> OpResult;

/// What happens when an operator is dispatched
#[derive(Clone, Copy)]
pub enum Action {
    Apply(OpFn),
    Structural,
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Apply(_) => write!(f, "Apply(<fn>)"),
            Action::Structural => write!(f, "Structural"),
        }
    }
}

/// An entry of the operator catalog
#[derive(Debug, Clone)]
pub struct Operator {
    pub id: &'static str,
    pub arity_in: usize,
    pub arity_out: usize,
    pub action: Action,
    pub description: &'static str,
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Operator {
    const fn new(
        id: &'static str,
        arity_in: usize,
        arity_out: usize,
        action: Action,
        description: &'static str,
    ) -> Self {
        Operator {
            id,
            arity_in,
            arity_out,
            action,
            description,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self.action, Action::Structural)
    }
}

/// Catalog in display order
static CATALOG: &[Operator] = &[
    Operator::new("+", 2, 1, Action::Apply(binary::add), "Addition"),
    Operator::new("-", 2, 1, Action::Apply(binary::sub), "Subtraction"),
    Operator::new("*", 2, 1, Action::Apply(binary::mul), "Multiplication"),
    Operator::new("/", 2, 1, Action::Apply(binary::div), "Division"),
    Operator::new("^", 2, 1, Action::Apply(binary::pow), "Power"),
    Operator::new("+/-", 1, 1, Action::Apply(unary::negate), "Change sign"),
    Operator::new(
        "Swap",
        2,
        2,
        Action::Apply(binary::swap),
        "Swap two top items in stack",
    ),
    Operator::new(
        "Drop",
        1,
        0,
        Action::Structural,
        "Remove the top item from stack",
    ),
    Operator::new("sqrt", 1, 1, Action::Apply(unary::sqrt), "Square root"),
    Operator::new("sqr", 1, 1, Action::Apply(unary::sqr), "Square"),
    Operator::new("1/x", 1, 1, Action::Apply(unary::reciprocal), "Reciprocal"),
    Operator::new("ln", 1, 1, Action::Apply(unary::ln), "Natural logarithm"),
    Operator::new("log", 1, 1, Action::Apply(unary::log10), "Base-10 logarithm"),
    Operator::new("exp", 1, 1, Action::Apply(unary::exp), "Exponential"),
    Operator::new("sin", 1, 1, Action::Apply(unary::sin), "Sine (radians)"),
    Operator::new("cos", 1, 1, Action::Apply(unary::cos), "Cosine (radians)"),
    Operator::new("tan", 1, 1, Action::Apply(unary::tan), "Tangent (radians)"),
    Operator::new("pi", 0, 1, Action::Apply(unary::pi), "The constant pi"),
    Operator::new("const_e", 0, 1, Action::Apply(unary::euler), "The constant e"),
];

/// Read-only lookup table over the operator catalog
#[derive(Debug)]
pub struct OperatorRegistry {
    by_id: FxHashMap<&'static str, &'static Operator>,
}

impl OperatorRegistry {
    fn build() -> Self {
        let by_id = CATALOG.iter().map(|op| (op.id, op)).collect();
        OperatorRegistry { by_id }
    }

    /// Find an operator by its canonical identifier
    pub fn lookup(&self, id: &str) -> Option<&'static Operator> {
        self.by_id.get(id).copied()
    }

    /// All operators in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &'static Operator> {
        CATALOG.iter()
    }

    pub fn len(&self) -> usize {
        CATALOG.len()
    }

    pub fn is_empty(&self) -> bool {
        CATALOG.is_empty()
    }
}

/// The process-wide operator registry
pub fn registry() -> &'static OperatorRegistry {
    static REGISTRY: OnceLock<OperatorRegistry> = OnceLock::new();
    REGISTRY.get_or_init(OperatorRegistry::build)
}

/// Turn an infinite result from finite inputs into [`Fault::Overflow`]
pub(crate) fn checked(value: f64, inputs: &[f64]) -> Result<f64, Fault> {
    if value.is_infinite() && inputs.iter().all(|x| x.is_finite()) {
        return Err(Fault::Overflow);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let minus = registry().lookup("-").unwrap();
        assert_eq!(minus.arity_in, 2);
        assert_eq!(minus.arity_out, 1);
        assert!(registry().lookup("nope").is_none());
    }

    #[test]
    fn test_identifiers_are_unique() {
        assert_eq!(registry().by_id.len(), registry().len());
    }

    #[test]
    fn test_drop_is_the_only_structural_operator() {
        let structural: Vec<&str> = registry()
            .iter()
            .filter(|op| op.is_structural())
            .map(|op| op.id)
            .collect();
        assert_eq!(structural, vec!["Drop"]);
        assert_eq!(registry().lookup("Drop").unwrap().arity_out, 0);
    }

    #[test]
    fn test_arities_match_functions() {
        for op in registry().iter() {
            if let Action::Apply(func) = op.action {
                let args = vec![2.0; op.arity_in];
                let out = func(&args).unwrap();
                assert_eq!(out.len(), op.arity_out, "operator {}", op.id);
            }
        }
    }

    #[test]
    fn test_constants_take_no_operands() {
        assert_eq!(registry().lookup("pi").unwrap().arity_in, 0);
        assert_eq!(registry().lookup("const_e").unwrap().arity_in, 0);
    }
}
