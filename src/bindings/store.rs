// SPDX-License-Identifier: MIT

//! Owned variable bindings

use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::environment::ValueEnvironment;
use crate::error::BindingsError;

/// Variable name to string value store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: BTreeMap<String, String>,
}

impl Bindings {
    /// Create an empty set of bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated `key=value` pairs, e.g. `v0=1 v4=true`.
    ///
    /// Later pairs overwrite earlier ones. The value may be empty, the key
    /// may not.
    pub fn parse_pairs(line: &str) -> Result<Self, BindingsError> {
        let mut bindings = Self::new();
        bindings.extend_pairs(line)?;
        Ok(bindings)
    }

    /// Merge `key=value` pairs into these bindings
    pub fn extend_pairs(&mut self, line: &str) -> Result<(), BindingsError> {
        for pair in line.split_whitespace() {
            let (key, value) = pair
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| BindingsError::MalformedPair(pair.to_string()))?;
            self.insert(key, value);
        }
        Ok(())
    }

    /// Load bindings from a flat YAML or JSON mapping file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BindingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse bindings from a flat YAML (or JSON) mapping.
    ///
    /// Scalars are stored by their text, so `v1: 15.55` binds `"15.55"` and
    /// `v4: true` binds `"true"`.
    pub fn from_yaml(content: &str) -> Result<Self, BindingsError> {
        let raw: BTreeMap<String, Value> = serde_yaml::from_str(content)?;
        let mut bindings = Self::new();

        for (key, value) in raw {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return Err(BindingsError::UnsupportedValue { key }),
            };
            bindings.values.insert(key, text);
        }

        Ok(bindings)
    }

    /// Bind `key` to `value`, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Copy every binding of `other` over these bindings
    pub fn merge(&mut self, other: Bindings) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate bindings in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ValueEnvironment for Bindings {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
