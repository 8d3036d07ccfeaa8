//! Mapping entries

use crate::association::Association;
use serde::{Deserialize, Serialize};
use tagframe_schema::{ClientId, WidgetType};

/// One prediction-tag to widget-option association record
///
/// `widget_type` duplicates the widget's discriminator next to its id
/// so downstream consumers can interpret `association` without
/// re-fetching the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    pub client_id: ClientId,
    /// Prediction tag id
    pub tag: String,
    /// Persisted widget id
    pub widget: String,
    pub widget_type: WidgetType,
    pub association: Association,
}

impl MappingEntry {
    /// Create an entry with a fresh client id
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        widget: impl Into<String>,
        widget_type: WidgetType,
        association: Association,
    ) -> Self {
        Self {
            client_id: ClientId::generate(),
            tag: tag.into(),
            widget: widget.into(),
            widget_type,
            association,
        }
    }

    /// Whether this entry matches the (tag, widget, association) triple
    #[inline]
    #[must_use]
    pub fn matches(&self, tag: &str, widget: &str, association: &Association) -> bool {
        self.tag == tag && self.widget == widget && &self.association == association
    }
}
