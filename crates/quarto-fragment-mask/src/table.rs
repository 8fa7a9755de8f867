/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The per-call association between placeholder keys and fragment text.
//!
//! A [`FragmentTable`] is built fresh by each [`extract`](crate::extract)
//! call and consumed by the matching [`restore`](crate::restore) call. It is
//! an ordinary value, never shared and never global, so extractions on
//! different documents cannot interfere. Iteration order is insertion order,
//! which for extraction means rightmost-original-fragment first; restoration
//! relies on replaying the keys in exactly that order.

use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from placeholder key to original fragment text.
///
/// Keys are the bare digit strings (e.g. `"4821733"`), not the full
/// `FRAGMENT<digits>` token; see
/// [`placeholder_token`](crate::placeholder_token) for the token form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentTable {
    entries: Vec<(String, String)>,
}

impl FragmentTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded fragments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a key is already present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Look up the fragment text recorded for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, fragment)| fragment.as_str())
    }

    /// Record a key → fragment association.
    ///
    /// Keys must be unique within one table; extraction guarantees this by
    /// collision-checking generated keys before insertion.
    pub fn insert(&mut self, key: impl Into<String>, fragment: impl Into<String>) {
        let key = key.into();
        debug_assert!(!self.contains_key(&key), "duplicate fragment key");
        self.entries.push((key, fragment.into()));
    }

    /// Iterate over `(key, fragment)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut table = FragmentTable::new();
        table.insert("2222222", "{% second %}");
        table.insert("1111111", "{% first %}");

        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["2222222", "1111111"]);
    }

    #[test]
    fn test_lookup() {
        let mut table = FragmentTable::new();
        table.insert("1234567", "{% x %}");

        assert!(table.contains_key("1234567"));
        assert!(!table.contains_key("7654321"));
        assert_eq!(table.get("1234567"), Some("{% x %}"));
        assert_eq!(table.get("7654321"), None);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut table = FragmentTable::new();
        table.insert("1234567", "{% print('x') %}");

        let json = serde_json::to_string(&table).unwrap();
        let back: FragmentTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
