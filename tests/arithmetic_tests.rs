// Operator evaluation through the dispatcher

use rpncalc::calculator::{Calculator, DispatchResult};

fn eval(tokens: &[&str]) -> DispatchResult {
    let mut calc = Calculator::new();
    let mut last = DispatchResult::default();
    for token in tokens {
        last = calc.dispatch_token(token);
    }
    last
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_basic_arithmetic() {
    assert_eq!(eval(&["2", "Enter", "3", "+"]).stack, vec![5.0]);
    assert_eq!(eval(&["5", "Enter", "3", "-"]).stack, vec![2.0]);
    assert_eq!(eval(&["4", "Enter", "2", "5", "*"]).stack, vec![100.0]);
    assert_eq!(eval(&["9", "Enter", "2", "/"]).stack, vec![4.5]);
    assert_eq!(eval(&["2", "Enter", "8", "^"]).stack, vec![256.0]);
}

#[test]
fn test_keypad_aliases() {
    assert_eq!(eval(&["2", "Return", "3", "KP_Add"]).stack, vec![5.0]);
    assert_eq!(eval(&["2", "Return", "3", "minus"]).stack, vec![-1.0]);
    assert_eq!(eval(&["2", "Return", "3", "asterisk"]).stack, vec![6.0]);
    assert_eq!(eval(&["3", "Return", "2", "asciicircum"]).stack, vec![9.0]);
}

#[test]
fn test_chained_expression() {
    // (3 + 4) * (5 - 2) = 21
    let result = eval(&["3", "Enter", "4", "+", "5", "Enter", "2", "-", "*"]);
    assert_eq!(result.stack, vec![21.0]);
}

#[test]
fn test_division_by_zero_rolls_back() {
    let result = eval(&["1", "Enter", "0", "Enter", "/"]);
    assert_eq!(result.error.as_deref(), Some("float division by zero"));
    assert_eq!(result.stack, vec![1.0, 0.0]);
}

#[test]
fn test_fault_after_commit_keeps_committed_value() {
    // The pending entry is committed before the operator runs
    let result = eval(&["1", "Enter", "0", "/"]);
    assert!(result.error.is_some());
    assert_eq!(result.stack, vec![1.0, 0.0]);
    assert_eq!(result.entry, "");
}

#[test]
fn test_domain_errors_roll_back() {
    let result = eval(&["2", "Enter", "4", "m", "r"]);
    assert_eq!(result.error.as_deref(), Some("math domain error"));
    assert_eq!(result.stack, vec![2.0, -4.0]);

    let result = eval(&["0", "Enter", "l"]);
    assert_eq!(result.error.as_deref(), Some("math domain error"));
    assert_eq!(result.stack, vec![0.0]);

    let result = eval(&["0", "Enter", "1", "m", "^"]);
    assert_eq!(
        result.error.as_deref(),
        Some("0.0 cannot be raised to a negative power")
    );
    assert_eq!(result.stack, vec![0.0, -1.0]);
}

#[test]
fn test_overflow_rolls_back() {
    let result = eval(&["1", "e", "2", "0", "0", "Enter", "Enter", "*"]);
    assert_eq!(result.error.as_deref(), Some("Numerical result out of range"));
    assert_eq!(result.stack, vec![1e200, 1e200]);
}

#[test]
fn test_too_few_arguments() {
    let result = eval(&["3", "Enter", "+"]);
    assert_eq!(result.error.as_deref(), Some("Too few arguments"));
    assert_eq!(result.stack, vec![3.0]);

    let result = eval(&["sqrt"]);
    assert_eq!(result.error.as_deref(), Some("Too few arguments"));
    assert!(result.stack.is_empty());
}

#[test]
fn test_unary_functions() {
    assert_eq!(eval(&["9", "r"]).stack, vec![3.0]);
    assert_eq!(eval(&["4", "i"]).stack, vec![0.25]);
    assert_eq!(eval(&["3", "w"]).stack, vec![9.0]);
    assert_close(eval(&["1", "x"]).stack[0], std::f64::consts::E);
    assert_close(eval(&["1", "0", "0", "L"]).stack[0], 2.0);
    assert_close(eval(&["0", "n"]).stack[0], 0.0);
    assert_close(eval(&["0", "o"]).stack[0], 1.0);
}

#[test]
fn test_constants() {
    let result = eval(&["p", "2", "*"]);
    assert_close(result.stack[0], 2.0 * std::f64::consts::PI);

    let result = eval(&["e^1"]);
    assert_close(result.stack[0], std::f64::consts::E);
}

#[test]
fn test_constant_commits_entry() {
    let result = eval(&["3", "pi"]);
    assert_eq!(result.stack.len(), 2);
    assert_eq!(result.stack[0], 3.0);
}
