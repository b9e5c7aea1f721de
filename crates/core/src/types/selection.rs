//! Shopper-chosen options attached to a cart line.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Option values chosen at add-time (e.g., size and color).
///
/// Entries are kept ordered by option name, so two selections holding the
/// same pairs are equal and encode identically no matter the order they
/// were built in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    /// Option name for the chosen size.
    pub const SIZE: &'static str = "size";
    /// Option name for the chosen color token.
    pub const COLOR: &'static str = "color";

    /// Create an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, option: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(option, value);
        self
    }

    /// Set an option, replacing any previous value.
    pub fn insert(&mut self, option: impl Into<String>, value: impl Into<String>) {
        self.0.insert(option.into(), value.into());
    }

    /// Get the value chosen for an option.
    #[must_use]
    pub fn get(&self, option: &str) -> Option<&str> {
        self.0.get(option).map(String::as_str)
    }

    /// Whether no option was chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of chosen options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical JSON encoding with keys in sorted order.
    ///
    /// An empty selection encodes as `{}`.
    #[must_use]
    pub fn canonical(&self) -> String {
        let entries: Map<String, Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(entries).to_string()
    }

    /// Human-readable summary such as `Color: #ffffff, Size: 6.5`.
    ///
    /// Returns `None` for an empty selection.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(option, value)| format!("{}: {value}", title_case(option)))
            .collect();
        Some(parts.join(", "))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Uppercase the first character of an attribute name (`gold` → `Gold`).
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
