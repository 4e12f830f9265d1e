// SPDX-License-Identifier: MIT

//! Typed error handling for predicate-rs
//!
//! Lexing never fails. Reduction failures abort the current evaluation,
//! while a malformed expression is not an error and simply yields `false`.

use thiserror::Error;

/// Top-level error type for predicate-rs
#[derive(Debug, Error)]
pub enum PredicateError {
    /// Expression evaluation failed
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// Variable bindings could not be built
    #[error("Bindings error: {0}")]
    Bindings(#[from] BindingsError),
}

/// Errors that abort a single evaluation
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    /// Identifier has no entry in the value environment
    #[error("Unbound variable '{0}'")]
    UnboundVariable(String),

    /// Numeric literal does not parse as a float
    #[error("Malformed number '{0}'")]
    MalformedNumber(String),

    /// Identifier used in a numeric comparison is bound to a non-numeric value
    #[error("Variable '{name}' is not numeric: '{value}'")]
    NonNumericVariable { name: String, value: String },
}

/// Errors raised while building a value environment
#[derive(Debug, Error)]
pub enum BindingsError {
    /// A `key=value` pair without `=` or with an empty key
    #[error("Malformed binding '{0}', expected key=value")]
    MalformedPair(String),

    /// Bindings file value that is not a scalar
    #[error("Unsupported value for '{key}', expected a string, number or boolean")]
    UnsupportedValue { key: String },

    /// YAML/JSON parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EvalError {
    /// Create an unbound variable error
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::UnboundVariable(name.into())
    }

    /// Create a non-numeric variable error
    pub fn non_numeric(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NonNumericVariable {
            name: name.into(),
            value: value.into(),
        }
    }
}
