// SPDX-License-Identifier: MIT

pub mod bindings;
pub mod condition;
pub mod error;

pub use bindings::{Bindings, ValueEnvironment};
pub use condition::{evaluate, evaluate_pairs, tokenize};
pub use error::{BindingsError, EvalError, PredicateError};
