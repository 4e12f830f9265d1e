//! Predicate expression evaluator

use super::lexer::tokenize;
use super::reducer::Reducer;
use crate::bindings::{Bindings, ValueEnvironment};
use crate::error::{EvalError, PredicateError};

/// Evaluate a predicate expression against a value environment.
///
/// There is no syntax validation: an expression that does not reduce to a
/// single `true` evaluates to `false`. Referencing an unbound identifier or
/// comparing a malformed number is an error.
pub fn evaluate<E>(expression: &str, values: &E) -> Result<bool, EvalError>
where
    E: ValueEnvironment + ?Sized,
{
    let mut reducer = Reducer::new(values);
    for token in tokenize(expression) {
        reducer.shift(token)?;
    }

    let result = reducer.finish()?;
    log::debug!("Evaluated '{}' -> {}", expression, result);
    Ok(result)
}

/// Evaluate an expression against whitespace-separated `key=value` pairs
pub fn evaluate_pairs(expression: &str, pairs: &str) -> Result<bool, PredicateError> {
    let bindings = Bindings::parse_pairs(pairs)?;
    Ok(evaluate(expression, &bindings)?)
}
