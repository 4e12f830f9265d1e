// SPDX-License-Identifier: MIT

//! Predicate expression engine
//!
//! This module provides tokenizing and evaluation of predicate expressions.
//! Expressions are boolean/numeric comparisons over `v<digits>` variables:
//! - `v0 == 1`
//! - `(v0 == 2 || v1 > 10)`
//! - `(v0 == 2 || (v1 > 10 && v2 > 3)) && !v4`

mod evaluator;
mod lexer;
mod reducer;
mod token;

pub use evaluator::{evaluate, evaluate_pairs};
pub use lexer::tokenize;
pub use reducer::Reducer;
pub use token::{InfixOp, Token};
