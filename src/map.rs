//! Ordered map type for SCL configuration trees.
//!
//! [`SclMap`] is the configuration tree itself: the document root and every `class`
//! body are `SclMap`s. It wraps [`IndexMap`] so that keys iterate in the order they
//! first appeared in the source, which keeps serialization deterministic.
//!
//! A key may repeat in SCL text. Re-inserting a key replaces its value but keeps the
//! position of its first occurrence, so the last assignment wins. Equality between
//! maps is order-sensitive.
//!
//! ## Examples
//!
//! ```rust
//! use serde_scl::{SclMap, Value};
//!
//! let mut map = SclMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to SCL values.
///
/// # Examples
///
/// ```rust
/// use serde_scl::{SclMap, Value};
///
/// let mut map = SclMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SclMap(IndexMap<String, Value>);

/// Two maps are equal when they hold equal entries in the same order.
impl PartialEq for SclMap {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl SclMap {
    /// Creates an empty `SclMap`.
    #[must_use]
    pub fn new() -> Self {
        SclMap(IndexMap::new())
    }

    /// Creates an empty `SclMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SclMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place and the
    /// old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_scl::{SclMap, Value};
    ///
    /// let mut map = SclMap::new();
    /// map.insert("a".to_string(), Value::from(1));
    /// map.insert("b".to_string(), Value::from(2));
    /// assert_eq!(map.insert("a".to_string(), Value::from(3)), Some(Value::from(1)));
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// assert_eq!(map.get("a").and_then(Value::as_i64), Some(3));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the key-value pairs, in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }
}

impl From<HashMap<String, Value>> for SclMap {
    fn from(map: HashMap<String, Value>) -> Self {
        SclMap(map.into_iter().collect())
    }
}

impl From<SclMap> for HashMap<String, Value> {
    fn from(map: SclMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for SclMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SclMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for SclMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        SclMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Value)> for SclMap {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_keeps_order() {
        let mut map: SclMap = vec![
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
            ("c".to_string(), Value::from(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.remove("b"), Some(Value::from(2)));
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_order_sensitive_equality() {
        let ab: SclMap = vec![
            ("a".to_string(), Value::from(true)),
            ("b".to_string(), Value::from(false)),
        ]
        .into_iter()
        .collect();
        let ba: SclMap = vec![
            ("b".to_string(), Value::from(false)),
            ("a".to_string(), Value::from(true)),
        ]
        .into_iter()
        .collect();

        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }
}
