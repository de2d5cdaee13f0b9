//! Raw widget attributes
//!
//! The host page configures the widget through named string attributes on
//! the widget element (`spotify-artist-id`, `yt-height`, ...). This module
//! captures that input verbatim; all parsing and defaulting happens later,
//! in [`PlayerConfig::from_attributes`](crate::PlayerConfig::from_attributes).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute set of one widget element
///
/// Keys are the kebab-case attribute names, values are kept verbatim.
/// The set is serde-transparent, so hosts can also supply it as a plain
/// YAML or JSON mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: HashMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw value of an attribute
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether an attribute is present, whatever its value
    ///
    /// Presence-based flags such as `uniform-tabs` count an empty value
    /// as set.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of attributes in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries }
    }
}
