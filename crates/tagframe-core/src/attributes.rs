//! Per-entry attribute store
//!
//! Provides [`EntryAttributes`], the attribute values of one entry
//! keyed by widget client id. The store is owned exclusively by the
//! tagging surface holding it; edits apply in event order (last write
//! wins on the same widget), and values for deleted widgets are
//! discarded on [`EntryAttributes::prune`].

use tagframe_schema::{Attribute, AttributeData, ClientId, Framework};
use tracing::debug;

/// Attribute values of one entry, keyed by widget client id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryAttributes {
    values: indexmap::IndexMap<ClientId, Attribute>,
}

impl EntryAttributes {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the value for a widget
    ///
    /// Creates the attribute record on first write; later writes
    /// replace the data in place, keeping the record's client id
    /// (last write wins — there is no versioning of concurrent edits).
    pub fn set(&mut self, widget: &ClientId, data: AttributeData) {
        match self.values.get_mut(widget) {
            Some(existing) => {
                debug!(widget = %widget, "overwriting attribute");
                existing.data = data;
            }
            None => {
                debug!(widget = %widget, "creating attribute");
                self.values.insert(widget.clone(), Attribute::new(data));
            }
        }
    }

    /// Value for a widget, if tagged
    #[must_use]
    pub fn get(&self, widget: &ClientId) -> Option<&Attribute> {
        self.values.get(widget)
    }

    /// Discard the value for one widget (widget deletion)
    pub fn remove_widget(&mut self, widget: &ClientId) -> Option<Attribute> {
        self.values.shift_remove(widget)
    }

    /// Discard values whose widget no longer exists in the framework
    ///
    /// Returns how many values were discarded.
    pub fn prune(&mut self, framework: &Framework) -> usize {
        let before = self.values.len();
        self.values
            .retain(|widget, _| framework.widget_by_client_id(widget).is_some());
        before - self.values.len()
    }

    /// Iterate (widget client id, attribute) in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&ClientId, &Attribute)> {
        self.values.iter()
    }

    /// Number of tagged widgets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is tagged
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
