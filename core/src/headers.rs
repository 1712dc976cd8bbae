//! Case-insensitive header map.
//!
//! # Design
//! Header names are folded to ASCII lowercase on insert and lookup, so
//! `Content-Type` and `content-type` address the same entry. The same
//! header model is used for request descriptors, raw transport responses,
//! and envelopes, so no backend header type leaks through the API. Backed
//! by a `BTreeMap`, which keeps iteration order deterministic for the test
//! vectors.

use std::collections::BTreeMap;

/// String-to-string header map with case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    inner: BTreeMap<String, String>,
}

impl Headers {
    /// Empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any existing value stored under the same
    /// case-insensitive name. Returns the replaced value, if any.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.inner.insert(name.to_ascii_lowercase(), value.into())
    }

    /// Look up a header by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Whether a header with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(name, value)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value);
        }
        headers
    }
}

impl From<&[(&str, &str)]> for Headers {
    fn from(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().copied().collect()
    }
}
