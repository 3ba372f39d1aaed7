//! Ordered parameter tree mirroring the wire document.

use serde::{Deserialize, Serialize};

/// A value in a [`ParamTree`]: scalar text or a nested subtree.
///
/// Scalars are stored as their text form; numeric inputs convert on the
/// way in, so serialization never has to coerce types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamValue {
    Scalar(String),
    Tree(ParamTree),
}

/// Ordered mapping from field name to scalar or nested subtree.
///
/// The wire protocol nests one level (ORDER and PAYMENT sections) and
/// some processor parsers are order-sensitive, so entries keep insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamTree {
    entries: Vec<(String, ParamValue)>,
}

impl ParamTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing an existing value in place so the original
    /// position is kept.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<ParamTree> for ParamValue {
    fn from(tree: ParamTree) -> Self {
        ParamValue::Tree(tree)
    }
}
