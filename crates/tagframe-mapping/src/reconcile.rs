//! Mapping reconciliation
//!
//! Provides [`MappingSet`], the order-preserving collection of
//! [`MappingEntry`] records with idempotent add/remove. At most one
//! entry exists per (tag, widget, association) triple, enforced by
//! lookup-before-insert.

use crate::association::Association;
use crate::entry::MappingEntry;
use serde::{Deserialize, Serialize};
use tagframe_schema::Widget;
use tracing::debug;

/// Order-preserving set of mapping entries
///
/// Entries keep insertion order; removal preserves the relative order
/// of the remaining entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingSet {
    entries: Vec<MappingEntry>,
}

impl MappingSet {
    /// Create an empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing entries (e.g. loaded from the server)
    #[inline]
    #[must_use]
    pub fn from_entries(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    /// Associate `tag` with a choice point of `widget`
    ///
    /// Looks up the (tag, widget, association) triple first; if an
    /// entry already exists this is a no-op. Otherwise a new entry
    /// with a fresh client id is appended, carrying the widget's id
    /// and type discriminator.
    ///
    /// Returns `true` if an entry was appended.
    ///
    /// # Panics
    /// If `widget.id` is `None`: mapping an unsaved widget is a
    /// programming error, not a recoverable condition.
    pub fn add(&mut self, tag: &str, widget: &Widget, association: Association) -> bool {
        let widget_id = widget
            .id
            .as_deref()
            .expect("cannot map against an unsaved widget (missing id)");

        if self.is_associated(tag, widget_id, &association) {
            debug!(tag, widget = widget_id, "mapping already present; skipping");
            return false;
        }

        debug!(tag, widget = widget_id, ?association, "adding mapping");
        self.entries.push(MappingEntry::new(
            tag,
            widget_id,
            widget.widget_type(),
            association,
        ));
        true
    }

    /// Remove the entry for the (tag, widget, association) triple
    ///
    /// Absent triples are a no-op; unrelated entries are never
    /// touched. Returns `true` if an entry was removed.
    pub fn remove(&mut self, tag: &str, widget_id: &str, association: &Association) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|e| e.matches(tag, widget_id, association))
        else {
            return false;
        };
        debug!(tag, widget = widget_id, ?association, "removing mapping");
        self.entries.remove(index);
        true
    }

    /// Whether the (tag, widget, association) triple is present
    #[must_use]
    pub fn is_associated(&self, tag: &str, widget_id: &str, association: &Association) -> bool {
        self.entries
            .iter()
            .any(|e| e.matches(tag, widget_id, association))
    }

    /// How many tags map onto this association of the widget
    #[must_use]
    pub fn mapped_count(&self, widget_id: &str, association: &Association) -> usize {
        self.entries
            .iter()
            .filter(|e| e.widget == widget_id && &e.association == association)
            .count()
    }

    /// Entries targeting one widget, in insertion order
    pub fn entries_for_widget<'a>(
        &'a self,
        widget_id: &'a str,
    ) -> impl Iterator<Item = &'a MappingEntry> {
        self.entries.iter().filter(move |e| e.widget == widget_id)
    }

    /// Drop all entries targeting one widget (widget deletion)
    pub fn remove_widget(&mut self, widget_id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.widget != widget_id);
        before - self.entries.len()
    }

    /// All entries in insertion order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MappingSet {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
