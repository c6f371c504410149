//! User-maintained header map.

use std::collections::BTreeMap;

/// Mapping from header name to header value.
///
/// Keys are unique; adding an existing key overwrites its value.
/// Iteration is in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderStore {
    entries: BTreeMap<String, String>,
}

impl HeaderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name -> value`.
    ///
    /// Returns the previous value when the name was already present.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (name, value) in iter {
            store.add(name, value);
        }
        store
    }
}
