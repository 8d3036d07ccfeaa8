//! Sections and the framework tree
//!
//! A [`Framework`] is an ordered tree of [`Section`]s carrying
//! primary-tagging widgets, plus a flat list of secondary-tagging
//! widgets. Keys must be unique per list and orders dense per list.

use crate::error::SchemaError;
use crate::ident::ClientId;
use crate::option::{sort_by_order, Ordered};
use crate::widget::Widget;
use serde::{Deserialize, Serialize};

/// Ordered container of primary-tagging widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub client_id: ClientId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Section {
    /// Create an empty section with a fresh client id
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            client_id: ClientId::generate(),
            title: title.into(),
            tooltip: None,
            order: 1,
            widgets: Vec::new(),
        }
    }
}

impl Ordered for Section {
    fn order(&self) -> u32 {
        self.order
    }
}

/// The configurable schema of taggable fields applied to entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    /// Sections of primary-tagging widgets, in display order
    #[serde(default)]
    pub primary: Vec<Section>,
    /// Secondary-tagging widgets, flat
    #[serde(default)]
    pub secondary: Vec<Widget>,
}

impl Framework {
    /// Validate structural invariants
    ///
    /// Checks, per widget list: key uniqueness and dense display order
    /// (`1..=n` after sorting). Section keys are their client ids and
    /// are unique by construction; section orders must also be dense.
    ///
    /// # Errors
    /// The first violation found, scoped to the offending list.
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_dense_orders("sections", &self.primary)?;
        for section in &self.primary {
            let scope = format!("section '{}'", section.title);
            check_unique_keys(&scope, section.widgets.iter().map(|w| w.key.as_str()))?;
            check_dense_orders(&scope, &section.widgets)?;
        }
        check_unique_keys(
            "secondary widgets",
            self.secondary.iter().map(|w| w.key.as_str()),
        )?;
        check_dense_orders("secondary widgets", &self.secondary)?;
        Ok(())
    }

    /// Re-densify orders after insertions or deletions
    ///
    /// Preserves the current display sequence (stable sort by order,
    /// then renumber from 1).
    pub fn normalize_orders(&mut self) {
        sort_by_order(&mut self.primary);
        for (i, section) in self.primary.iter_mut().enumerate() {
            section.order = index_to_order(i);
            sort_by_order(&mut section.widgets);
            for (j, widget) in section.widgets.iter_mut().enumerate() {
                widget.order = index_to_order(j);
            }
        }
        sort_by_order(&mut self.secondary);
        for (j, widget) in self.secondary.iter_mut().enumerate() {
            widget.order = index_to_order(j);
        }
    }

    /// Iterate all widgets, primary sections first, then secondary
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.primary
            .iter()
            .flat_map(|s| s.widgets.iter())
            .chain(self.secondary.iter())
    }

    /// Look up a widget by key across all lists
    #[must_use]
    pub fn widget_by_key(&self, key: &str) -> Option<&Widget> {
        self.widgets().find(|w| w.key == key)
    }

    /// Look up a widget by client id across all lists
    #[must_use]
    pub fn widget_by_client_id(&self, client_id: &ClientId) -> Option<&Widget> {
        self.widgets().find(|w| &w.client_id == client_id)
    }

    /// Total widget count across all lists
    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.widgets().count()
    }
}

fn index_to_order(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

fn check_unique_keys<'a>(
    scope: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), SchemaError> {
    let mut seen = std::collections::HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(SchemaError::DuplicateKey {
                scope: scope.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn check_dense_orders<T: Ordered>(scope: &str, items: &[T]) -> Result<(), SchemaError> {
    let mut orders: Vec<u32> = items.iter().map(Ordered::order).collect();
    orders.sort_unstable();
    for (i, found) in orders.into_iter().enumerate() {
        let expected = index_to_order(i);
        if found != expected {
            return Err(SchemaError::SparseOrder {
                scope: scope.to_string(),
                expected,
                found,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{TextProperties, WidgetProperties};

    fn text_widget(key: &str, order: u32) -> Widget {
        Widget::new(
            key,
            key.to_uppercase(),
            order,
            WidgetProperties::Text(TextProperties::default()),
        )
    }

    fn framework_with(widgets: Vec<Widget>) -> Framework {
        let mut section = Section::new("Main");
        section.widgets = widgets;
        Framework {
            primary: vec![section],
            secondary: Vec::new(),
        }
    }

    #[test]
    fn validate_accepts_dense_unique() {
        let framework = framework_with(vec![text_widget("a", 1), text_widget("b", 2)]);
        assert!(framework.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_key() {
        let framework = framework_with(vec![text_widget("a", 1), text_widget("a", 2)]);
        let err = framework.validate().unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateKey { .. }));
    }

    #[test]
    fn validate_rejects_sparse_order() {
        let framework = framework_with(vec![text_widget("a", 1), text_widget("b", 5)]);
        let err = framework.validate().unwrap_err();
        assert!(matches!(
            err,
            SchemaError::SparseOrder {
                expected: 2,
                found: 5,
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_duplicate_secondary_key() {
        let framework = Framework {
            primary: Vec::new(),
            secondary: vec![text_widget("x", 1), text_widget("x", 2)],
        };
        assert!(framework.validate().is_err());
    }

    #[test]
    fn normalize_orders_redensifies() {
        let mut framework = framework_with(vec![text_widget("b", 7), text_widget("a", 3)]);
        framework.normalize_orders();

        let keys: Vec<_> = framework.primary[0]
            .widgets
            .iter()
            .map(|w| (w.key.as_str(), w.order))
            .collect();
        assert_eq!(keys, vec![("a", 1), ("b", 2)]);
        assert!(framework.validate().is_ok());
    }

    #[test]
    fn widget_lookup_spans_primary_and_secondary() {
        let mut framework = framework_with(vec![text_widget("a", 1)]);
        framework.secondary.push(text_widget("s", 1));

        assert!(framework.widget_by_key("a").is_some());
        assert!(framework.widget_by_key("s").is_some());
        assert_eq!(framework.widget_count(), 2);
    }

    #[test]
    fn widget_lookup_by_client_id() {
        let widget = text_widget("a", 1);
        let client_id = widget.client_id.clone();
        let framework = framework_with(vec![widget]);
        assert!(framework.widget_by_client_id(&client_id).is_some());
    }

    #[test]
    fn empty_framework_is_valid() {
        assert!(Framework::default().validate().is_ok());
    }
}
