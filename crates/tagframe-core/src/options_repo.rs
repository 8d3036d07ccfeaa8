//! Options repository
//!
//! Provides [`OptionsRepository`], the explicit cache of externally
//! loaded option sets (geo areas, project members, organizations)
//! injected into display projections. Passed by handle into whatever
//! needs it; there is no ambient global state.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Name of the option set holding geo area labels
pub const GEO_AREAS: &str = "geo-areas";

/// One externally supplied key/label pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyLabel {
    pub key: String,
    pub label: String,
}

impl KeyLabel {
    /// Create a key/label pair
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Named sets of externally loaded options
///
/// Entries are retained until explicitly replaced; the repository is a
/// deterministic store, not an eviction cache. Safe to share across
/// readers; writes go through [`OptionsRepository::replace_set`] and
/// [`OptionsRepository::extend_set`].
#[derive(Debug, Default)]
pub struct OptionsRepository {
    sets: DashMap<String, Vec<KeyLabel>>,
}

impl OptionsRepository {
    /// Create an empty repository
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a whole option set
    pub fn replace_set(&self, name: impl Into<String>, options: Vec<KeyLabel>) {
        self.sets.insert(name.into(), options);
    }

    /// Append options to a set, creating it if absent
    ///
    /// Options whose key is already present are skipped.
    pub fn extend_set(&self, name: &str, options: impl IntoIterator<Item = KeyLabel>) {
        let mut set = self.sets.entry(name.to_string()).or_default();
        for option in options {
            if !set.iter().any(|o| o.key == option.key) {
                set.push(option);
            }
        }
    }

    /// Label for a key within a set
    #[must_use]
    pub fn label(&self, name: &str, key: &str) -> Option<String> {
        self.sets
            .get(name)?
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.clone())
    }

    /// Snapshot of a whole set
    #[must_use]
    pub fn set(&self, name: &str) -> Option<Vec<KeyLabel>> {
        self.sets.get(name).map(|s| s.clone())
    }

    /// Whether a set is loaded
    #[must_use]
    pub fn contains_set(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Number of loaded sets
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no sets are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
