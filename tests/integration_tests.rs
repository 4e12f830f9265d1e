//! Integration tests for predicate evaluation
//!
//! These tests run reference expressions end-to-end through the public API.

use once_cell::sync::Lazy;
use predicate_rs::{evaluate, evaluate_pairs, tokenize, Bindings, EvalError, PredicateError};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

// ============================================================================
// Fixtures
// ============================================================================

/// Reference environment shared by all expression tests
static VALUES: Lazy<Bindings> = Lazy::new(|| {
    Bindings::parse_pairs("v0=1 v1=15.55 v2=-10 v3=-15.000000001 v4=true v5=false")
        .expect("reference bindings")
});

const E1: &str = "v0 == 1";
const E2: &str = "(v0 == 2 || v1 > 10)";
const E3: &str = "(v0 == 2 || (v1 > 10 && v2 > 3)) && v3 == 0";
const E4: &str = "(v0 == 2 || (v1 > 10 && v2 > 3)) && v3 == -15.000000001 && !v4";
const E5: &str = "(v0 == 2 || (v1 > 10 && v2 > 3)) && v3 == -15.000000001 && v4";
const E6: &str =
    "((v0 == 2 || (v1 > 10 && v2 > 3)) && v3 == -15.000000001 && v4) && (v5 == !v4) ";
const E7: &str = "true";

// ============================================================================
// Tokenizer Tests
// ============================================================================

#[test]
fn test_tokenize_reference_expression() {
    let tokens: Vec<String> = tokenize(E6).iter().map(|t| t.to_string()).collect();

    assert_eq!(tokens[0], "(");
    assert_eq!(tokens[1], "(");
    assert_eq!(tokens[5], "||");
    assert_eq!(tokens[15], ")");
    assert_eq!(tokens[19], "-15.000000001");
    assert_eq!(tokens[20], "&&");
    assert_eq!(tokens[27], "!");
}

// ============================================================================
// Evaluation Tests
// ============================================================================

#[test]
fn test_reference_expressions() {
    assert!(evaluate(E1, &*VALUES).unwrap());
    assert!(evaluate(E2, &*VALUES).unwrap());
    assert!(!evaluate(E3, &*VALUES).unwrap());
    assert!(!evaluate(E4, &*VALUES).unwrap());
    assert!(evaluate(E7, &*VALUES).unwrap());
}

#[test]
fn test_reference_expressions_reduction_order() {
    // Both collapse the inner group to false before the trailing conjunction
    assert!(!evaluate(E5, &*VALUES).unwrap());
    assert!(!evaluate(E6, &*VALUES).unwrap());
}

#[test]
fn test_evaluation_is_idempotent() {
    for expr in [E1, E2, E3, E4, E5, E6, E7] {
        let first = evaluate(expr, &*VALUES).unwrap();
        let second = evaluate(expr, &*VALUES).unwrap();
        assert_eq!(first, second, "{}", expr);
    }
}

#[test]
fn test_double_negation_round_trip() {
    for (literal, expected) in [("true", true), ("false", false)] {
        assert_eq!(evaluate(literal, &*VALUES).unwrap(), expected);
        assert_eq!(
            evaluate(&format!("!!{}", literal), &*VALUES).unwrap(),
            expected
        );
        assert_eq!(
            evaluate(&format!("!{}", literal), &*VALUES).unwrap(),
            !expected
        );
    }
}

#[test]
fn test_single_comparison_without_parentheses() {
    assert!(evaluate("v1 > 15", &*VALUES).unwrap());
    assert!(evaluate("(v1 > 15)", &*VALUES).unwrap());
    assert!(evaluate("v3 < -14", &*VALUES).unwrap());
}

#[test]
fn test_comparisons_use_single_precision() {
    assert!(evaluate("v3 == -15", &*VALUES).unwrap());
    assert!(evaluate("v0 == 1.00000001", &*VALUES).unwrap());
    assert!(!evaluate("v3 < -15", &*VALUES).unwrap());
}

#[test]
fn test_malformed_expressions_are_false() {
    assert!(!evaluate("v0 ==", &*VALUES).unwrap());
    assert!(!evaluate("true true", &*VALUES).unwrap());
    assert!(!evaluate("((", &*VALUES).unwrap());
    assert!(!evaluate(")", &*VALUES).unwrap());
}

#[test]
fn test_unbound_variable_is_an_error() {
    let err = evaluate("v9 == 1", &*VALUES).unwrap_err();
    assert_eq!(err, EvalError::UnboundVariable("v9".to_string()));
    assert_eq!(err.to_string(), "Unbound variable 'v9'");
}

#[test]
fn test_non_numeric_variable_in_comparison() {
    let err = evaluate("1 == v4", &*VALUES).unwrap_err();
    assert!(matches!(err, EvalError::NonNumericVariable { name, .. } if name == "v4"));
}

#[test]
fn test_std_map_environment() {
    let mut values = BTreeMap::new();
    values.insert("v0".to_string(), "3".to_string());

    assert!(evaluate("v0 > 2", &values).unwrap());
}

#[test]
fn test_bindings_from_yaml() {
    let bindings = Bindings::from_yaml(
        r#"
        v0: 1
        v1: 15.55
        v4: true
        "#,
    )
    .unwrap();

    assert!(evaluate(E2, &bindings).unwrap());
    assert!(evaluate("(v4 && v0 == 1)", &bindings).unwrap());
}

#[test]
fn test_evaluate_pairs_request_line() {
    assert!(evaluate_pairs("(v0 == 2 || v1 > 10)", "v0=2 v1=0").unwrap());
    assert!(matches!(
        evaluate_pairs("v0 == 1", "v0:1"),
        Err(PredicateError::Bindings(_))
    ));
}

#[test]
fn test_parallel_evaluation() {
    let bindings = Arc::new(Bindings::clone(&VALUES));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let bindings = Arc::clone(&bindings);
            thread::spawn(move || {
                [E1, E2, E3, E7]
                    .iter()
                    .map(|expr| evaluate(expr, &*bindings).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![true, true, false, true]);
    }
}
