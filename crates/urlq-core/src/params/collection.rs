//! The working query-parameter collection.

use indexmap::IndexMap;
use std::fmt;
use url::form_urlencoded;

use super::{ParamSource, ParamValue};

/// Ordered key → value collection with upsert semantics.
///
/// Setting an existing key updates it in place; a new key is appended.
/// Removing a key shifts the later keys up, so a key that is removed and
/// set again lands at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: IndexMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a form-urlencoded query string. A single leading `?` is ignored.
    /// Duplicate keys collapse to the last value at the first position.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Applies one pair: the removal marker deletes, anything else upserts.
    pub fn apply(&mut self, key: String, value: &ParamValue) {
        if value.is_removal() {
            if self.contains_key(&key) {
                self.remove(&key);
                tracing::trace!("removed query parameter {}", key);
            }
            return;
        }
        if let Some(v) = value.coerce() {
            if self.get(&key) != Some(&*v) {
                self.entries.insert(key, v.into_owned());
            }
        }
    }

    /// Applies every pair of `source` in order.
    pub fn apply_source(&mut self, source: ParamSource) {
        for (key, value) in source.into_pairs() {
            self.apply(key, &value);
        }
    }

    /// Serializes as `application/x-www-form-urlencoded` (space → `+`).
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.entries {
            ser.append_pair(k, v);
        }
        ser.finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
