//! Tagging workbench
//!
//! Provides [`TaggingWorkbench`], the single owner of a framework, its
//! mapping set, and the per-entry attribute stores. All mutation goes
//! through it; edits apply in event order (last write wins), matching
//! the single-threaded ownership model of the tagging surface.

use crate::attributes::EntryAttributes;
use crate::binding::validate_attribute;
use crate::config::CoreConfig;
use crate::error::CoreError;
use crate::validate::validate_framework;
use std::collections::HashMap;
use tagframe_mapping::{possible_mappings, Association, MappingSet, PossibleMapping};
use tagframe_schema::{Attribute, AttributeData, Framework};
use tracing::{debug, info};

/// Owner of one framework's tagging state
#[derive(Debug)]
pub struct TaggingWorkbench {
    framework: Framework,
    config: CoreConfig,
    mapping: MappingSet,
    attributes: HashMap<String, EntryAttributes>,
}

impl TaggingWorkbench {
    /// Create a workbench over a validated framework
    ///
    /// # Errors
    /// Any violation reported by [`validate_framework`].
    pub fn new(framework: Framework, config: CoreConfig) -> Result<Self, CoreError> {
        validate_framework(&framework, &config)?;
        info!(widgets = framework.widget_count(), "workbench ready");
        Ok(Self {
            framework,
            config,
            mapping: MappingSet::new(),
            attributes: HashMap::new(),
        })
    }

    /// Adopt an existing mapping set (e.g. loaded from the server)
    #[must_use]
    pub fn with_mapping(mut self, mapping: MappingSet) -> Self {
        self.mapping = mapping;
        self
    }

    /// The framework under tagging
    #[inline]
    #[must_use]
    pub fn framework(&self) -> &Framework {
        &self.framework
    }

    /// The current mapping set
    #[inline]
    #[must_use]
    pub fn mapping(&self) -> &MappingSet {
        &self.mapping
    }

    /// Attribute store of one entry, if any widget is tagged
    #[must_use]
    pub fn entry(&self, entry_id: &str) -> Option<&EntryAttributes> {
        self.attributes.get(entry_id)
    }

    /// Tag an entry: set the attribute value for a widget
    ///
    /// Validates the value against the widget first; on success the
    /// write applies last-write-wins to the entry's store.
    ///
    /// # Errors
    /// [`CoreError::UnknownWidget`] when the key resolves to nothing,
    /// or the attribute validation failure.
    pub fn tag(
        &mut self,
        entry_id: &str,
        widget_key: &str,
        data: AttributeData,
    ) -> Result<(), CoreError> {
        let widget = self
            .framework
            .widget_by_key(widget_key)
            .ok_or_else(|| CoreError::UnknownWidget(widget_key.to_string()))?;
        validate_attribute(widget, &data)?;

        let client_id = widget.client_id.clone();
        self.attributes
            .entry(entry_id.to_string())
            .or_default()
            .set(&client_id, data);
        debug!(entry = entry_id, widget = widget_key, "entry tagged");
        Ok(())
    }

    /// Attribute value of one widget on one entry
    #[must_use]
    pub fn attribute(&self, entry_id: &str, widget_key: &str) -> Option<&Attribute> {
        let widget = self.framework.widget_by_key(widget_key)?;
        self.attributes.get(entry_id)?.get(&widget.client_id)
    }

    /// Discard the attribute value of one widget on one entry
    pub fn untag(&mut self, entry_id: &str, widget_key: &str) -> Option<Attribute> {
        let widget = self.framework.widget_by_key(widget_key)?;
        let client_id = widget.client_id.clone();
        self.attributes.get_mut(entry_id)?.remove_widget(&client_id)
    }

    /// Map a prediction tag onto a choice point of a widget
    ///
    /// Idempotent: an existing (tag, widget, association) triple is
    /// left untouched. Returns whether an entry was added.
    ///
    /// # Errors
    /// [`CoreError::UnknownWidget`] when the key resolves to nothing.
    ///
    /// # Panics
    /// If the widget exists but has never been persisted (no id).
    pub fn map_tag(
        &mut self,
        tag: &str,
        widget_key: &str,
        association: Association,
    ) -> Result<bool, CoreError> {
        let widget = self
            .framework
            .widget_by_key(widget_key)
            .ok_or_else(|| CoreError::UnknownWidget(widget_key.to_string()))?;
        Ok(self.mapping.add(tag, widget, association))
    }

    /// Remove a prediction-tag association; absent triples are a no-op
    pub fn unmap_tag(&mut self, tag: &str, widget_key: &str, association: &Association) -> bool {
        let Some(widget) = self.framework.widget_by_key(widget_key) else {
            return false;
        };
        let Some(widget_id) = widget.id.clone() else {
            return false;
        };
        self.mapping.remove(tag, &widget_id, association)
    }

    /// Labeled mapping candidates of one widget
    #[must_use]
    pub fn mapping_candidates(&self, widget_key: &str) -> Vec<PossibleMapping> {
        self.framework
            .widget_by_key(widget_key)
            .map(possible_mappings)
            .unwrap_or_default()
    }

    /// Delete a widget everywhere
    ///
    /// Removes the definition from its list, discards its attribute
    /// values on every entry, drops its mapping entries, and
    /// re-densifies display orders.
    ///
    /// # Errors
    /// [`CoreError::UnknownWidget`] when the key resolves to nothing.
    pub fn delete_widget(&mut self, widget_key: &str) -> Result<(), CoreError> {
        let widget = self
            .framework
            .widget_by_key(widget_key)
            .ok_or_else(|| CoreError::UnknownWidget(widget_key.to_string()))?;
        let client_id = widget.client_id.clone();
        let widget_id = widget.id.clone();

        for section in &mut self.framework.primary {
            section.widgets.retain(|w| w.client_id != client_id);
        }
        self.framework.secondary.retain(|w| w.client_id != client_id);
        self.framework.normalize_orders();

        for store in self.attributes.values_mut() {
            store.remove_widget(&client_id);
        }
        if let Some(widget_id) = widget_id {
            self.mapping.remove_widget(&widget_id);
        }
        info!(widget = widget_key, "widget deleted");
        Ok(())
    }

    /// Re-validate the framework (after external edits)
    pub fn revalidate(&self) -> Result<(), CoreError> {
        validate_framework(&self.framework, &self.config)
    }
}
