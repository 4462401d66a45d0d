//! Flat key to value mapping produced by one collection pass.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::ConfigValue;

/// Mapping from declared key to collected value.
///
/// Keys iterate in lexical order so repeated runs over the same source
/// produce identical tables. The serde form is a plain JSON object.
///
/// # Examples
///
/// ```
/// use autoconfig::{ConfigValue, SymbolTable};
///
/// let mut table = SymbolTable::new();
/// table.insert("name", "x");
/// table.insert("enabled", true);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("enabled"), Some(&ConfigValue::Boolean(true)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable(BTreeMap<String, ConfigValue>);

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<ConfigValue>
    where
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Returns `true` when `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes the entry for `key`.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.0.remove(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the declared keys in order.
    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in key order.
    #[must_use]
    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for SymbolTable
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for SymbolTable {
    type Item = (String, ConfigValue);
    type IntoIter = btree_map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface configuration mistakes"
    )]
    use super::*;

    #[test]
    fn insert_reports_replaced_value() {
        let mut table = SymbolTable::new();
        assert!(table.insert("k", 1_i64).is_none());
        assert_eq!(table.insert("k", 2_i64), Some(ConfigValue::from(1_i64)));
        assert_eq!(table.get("k"), Some(&ConfigValue::from(2_i64)));
    }

    #[test]
    fn keys_are_ordered() {
        let table: SymbolTable = [("b", true), ("a", false)].into_iter().collect();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn serialises_as_flat_object() {
        let table: SymbolTable = [("name", ConfigValue::from("x")), ("port", 80_i64.into())]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&table).expect("serialise table");
        assert_eq!(json, r#"{"name":"x","port":80}"#);
    }
}
