use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut, Index};

use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// A string-keyed map whose entries can also be reached by name through
/// `get_attr` / `set_attr` / `del_attr`.
///
/// Attribute access and key access share one store: a value set with
/// `set_attr("x", v)` is visible as `dict["x"]` and the other way round.
///
/// ```
/// use linear_nn::utils::AttributeKeyDict;
///
/// let mut dict = AttributeKeyDict::new();
/// dict.set_attr("test_key", "test_value");
/// assert_eq!(dict["test_key"], "test_value");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKeyDict<V> {
    entries: BTreeMap<String, V>,
}

impl<V> AttributeKeyDict<V> {
    pub fn new() -> Self {
        AttributeKeyDict { entries: BTreeMap::new() }
    }

    pub fn get_attr(&self, name: &str) -> Result<&V> {
        self.entries
            .get(name)
            .ok_or_else(|| NetworkError::MissingAttribute(name.to_string()))
    }

    pub fn get_attr_mut(&mut self, name: &str) -> Result<&mut V> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| NetworkError::MissingAttribute(name.to_string()))
    }

    /// Inserts or replaces; returns the previous value if any.
    pub fn set_attr(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(name.into(), value)
    }

    /// Removes the entry, failing if it is absent.
    pub fn del_attr(&mut self, name: &str) -> Result<V> {
        self.entries
            .remove(name)
            .ok_or_else(|| NetworkError::MissingAttribute(name.to_string()))
    }

    pub fn into_inner(self) -> BTreeMap<String, V> {
        self.entries
    }
}

impl<V> Default for AttributeKeyDict<V> {
    fn default() -> Self {
        AttributeKeyDict::new()
    }
}

impl<V> Deref for AttributeKeyDict<V> {
    type Target = BTreeMap<String, V>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<V> DerefMut for AttributeKeyDict<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entries
    }
}

impl<V> Index<&str> for AttributeKeyDict<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        &self.entries[key]
    }
}

impl<V> From<BTreeMap<String, V>> for AttributeKeyDict<V> {
    fn from(entries: BTreeMap<String, V>) -> Self {
        AttributeKeyDict { entries }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for AttributeKeyDict<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AttributeKeyDict {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
