//! Option types and ordering
//!
//! Provides the addressable choice points of selectable widgets
//! ([`ChoiceOption`], [`ColorOption`], [`OrganigramNode`]) and the
//! stable ordering helpers used everywhere option lists are rendered
//! or enumerated.

use serde::{Deserialize, Serialize};

/// Anything carrying a display order
///
/// `order` defines the display sequence within a list; ties are broken
/// by original position (see [`sort_by_order`]).
pub trait Ordered {
    /// Numeric display order
    fn order(&self) -> u32;
}

/// Stable in-place sort by display order
///
/// Stability is part of the contract: items with equal `order` keep
/// their relative input positions.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(Ordered::order);
}

/// Stable sorted copy by display order
#[must_use]
pub fn sorted_by_order<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    sort_by_order(&mut out);
    out
}

/// A selectable option: key, label, order
///
/// `key` must be unique (injective) within its containing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub order: u32,
}

impl ChoiceOption {
    /// Create an option without tooltip
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, order: u32) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            tooltip: None,
            order,
        }
    }
}

impl Ordered for ChoiceOption {
    fn order(&self) -> u32 {
        self.order
    }
}

/// A selectable option with an associated color (scale points, matrix rows)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOption {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub order: u32,
    pub color: String,
}

impl ColorOption {
    /// Create a colored option without tooltip
    #[inline]
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        order: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            tooltip: None,
            order,
            color: color.into(),
        }
    }
}

impl Ordered for ColorOption {
    fn order(&self) -> u32 {
        self.order
    }
}

/// Node of an organigram option tree
///
/// Every node is itself selectable; children nest arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganigramNode {
    pub key: String,
    pub label: String,
    pub order: u32,
    #[serde(default)]
    pub children: Vec<OrganigramNode>,
}

impl OrganigramNode {
    /// Create a leaf node
    #[inline]
    #[must_use]
    pub fn leaf(key: impl Into<String>, label: impl Into<String>, order: u32) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            order,
            children: Vec::new(),
        }
    }

    /// Create a node with children
    #[inline]
    #[must_use]
    pub fn branch(
        key: impl Into<String>,
        label: impl Into<String>,
        order: u32,
        children: Vec<OrganigramNode>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            order,
            children,
        }
    }

    /// Depth-first pre-order traversal over the subtree rooted here
    pub fn walk(&self, visit: &mut impl FnMut(&OrganigramNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Whether `key` names this node or any descendant
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        if self.key == key {
            return true;
        }
        self.children.iter().any(|c| c.contains_key(key))
    }

    /// Path of labels from this node down to `key`, if present
    ///
    /// The path includes both endpoints, root first.
    #[must_use]
    pub fn label_path(&self, key: &str) -> Option<Vec<&str>> {
        if self.key == key {
            return Some(vec![self.label.as_str()]);
        }
        for child in &self.children {
            if let Some(mut path) = child.label_path(key) {
                path.insert(0, self.label.as_str());
                return Some(path);
            }
        }
        None
    }
}

impl Ordered for OrganigramNode {
    fn order(&self) -> u32 {
        self.order
    }
}
