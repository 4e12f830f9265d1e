// SPDX-License-Identifier: MIT

//! Variable bindings for predicate evaluation
//!
//! This module provides:
//! - `ValueEnvironment` - the read-only lookup the engine resolves identifiers through
//! - `Bindings` - an owned store built from `key=value` pairs or a YAML/JSON file

mod environment;
mod store;

pub use environment::ValueEnvironment;
pub use store::Bindings;
