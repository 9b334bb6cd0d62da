//! Ordered record type.
//!
//! This module provides [`Record`], a wrapper around [`IndexMap`] mapping
//! normalized field keys to [`Value`]s.
//!
//! ## Why IndexMap?
//!
//! - **Discovery order**: fields iterate in the order the parser met them,
//!   which keeps debug output and serialized records close to the source text
//! - **Order-insensitive equality**: two records with the same entries compare
//!   equal whatever their insertion order, which is what compaction needs
//!
//! ## Examples
//!
//! ```rust
//! use hostinfo::{Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("model_name".to_string(), Value::from("Cortex-A53"));
//! record.insert("cpu_cores".to_string(), Value::from(4));
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.get("cpu_cores").and_then(|v| v.as_i64()), Some(4));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping of field keys to typed values.
///
/// Keys are unique; the parsers reject duplicates before inserting, so
/// [`Record::insert`] itself simply replaces.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("first".to_string(), Value::from(1));
/// record.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = record.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the record.
    ///
    /// If the record already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hostinfo::{Record, Value};
    ///
    /// let mut record = Record::new();
    /// assert!(record.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(record.insert("key".to_string(), Value::from(43)).is_some());
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

    /// Returns `true` if the record holds a value for the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, returning its value. Remaining fields keep their
    /// relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hostinfo::{Record, Value};
    ///
    /// let mut record = Record::new();
    /// record.insert("a".to_string(), Value::from(1));
    /// record.insert("b".to_string(), Value::from(2));
    /// record.insert("c".to_string(), Value::from(3));
    ///
    /// assert_eq!(record.remove("b"), Some(Value::from(2)));
    /// let keys: Vec<_> = record.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "c"]);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the record, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the record, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the record, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(map: HashMap<String, Value>) -> Self {
        Record(map.into_iter().collect())
    }
}

impl From<Record> for HashMap<String, Value> {
    fn from(record: Record) -> Self {
        record.0.into_iter().collect()
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Record(IndexMap::from_iter(iter))
    }
}
