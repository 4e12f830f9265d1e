// SPDX-License-Identifier: MIT

//! Read-only variable lookup used by the reduction engine

use std::collections::{BTreeMap, HashMap};

/// Mapping from identifier text to its string value.
///
/// The engine only ever reads through this trait and never mutates the
/// environment it is handed.
pub trait ValueEnvironment {
    /// Look up the string value bound to `name`
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl ValueEnvironment for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ValueEnvironment for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<E: ValueEnvironment + ?Sized> ValueEnvironment for &E {
    fn lookup(&self, name: &str) -> Option<&str> {
        (**self).lookup(name)
    }
}
