//! Error trees
//!
//! Provides [`ErrorTree`], the recursive error structure mirroring the
//! form value shape: each node carries an optional non-field message
//! plus child errors keyed by field name or list index.

use crate::path::{FieldPath, Segment};
use std::collections::BTreeMap;

/// Recursive, field-scoped validation errors
///
/// Mirrors the value tree: object fields map to nested trees, list
/// items to index-keyed trees. The `non_field` slot holds aggregate
/// messages that belong to the node itself rather than a child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTree {
    non_field: Option<String>,
    children: BTreeMap<Segment, ErrorTree>,
}

impl ErrorTree {
    /// Empty tree (no errors)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaf carrying a single non-field message
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            non_field: Some(message.into()),
            children: BTreeMap::new(),
        }
    }

    /// Whether the tree carries no message anywhere
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.non_field.is_none() && self.children.values().all(ErrorTree::is_empty)
    }

    /// Non-field message at this node
    #[inline]
    #[must_use]
    pub fn non_field(&self) -> Option<&str> {
        self.non_field.as_deref()
    }

    /// Set the non-field message at this node
    pub fn set_non_field(&mut self, message: impl Into<String>) {
        self.non_field = Some(message.into());
    }

    /// Attach a child error under a segment
    ///
    /// Empty child trees are dropped rather than attached.
    pub fn attach(&mut self, segment: impl Into<Segment>, child: ErrorTree) {
        if !child.is_empty() {
            self.children.insert(segment.into(), child);
        }
    }

    /// Insert a message at a nested path, creating intermediate nodes
    pub fn insert(&mut self, path: &FieldPath, message: impl Into<String>) {
        let mut node = self;
        for segment in path.iter() {
            node = node.children.entry(segment.clone()).or_default();
        }
        node.non_field = Some(message.into());
    }

    /// Subtree at a nested path (the `getErrorObject` projection)
    #[must_use]
    pub fn error_object(&self, path: &FieldPath) -> Option<&ErrorTree> {
        let mut node = self;
        for segment in path.iter() {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Message at a nested path (the `getErrorString` projection)
    #[must_use]
    pub fn error_string(&self, path: &FieldPath) -> Option<&str> {
        self.error_object(path).and_then(ErrorTree::non_field)
    }

    /// Child errors at this node
    #[inline]
    pub fn children(&self) -> impl Iterator<Item = (&Segment, &ErrorTree)> {
        self.children.iter()
    }

    /// Every message in the tree with its full path, depth first
    #[must_use]
    pub fn flatten(&self) -> Vec<(FieldPath, String)> {
        let mut out = Vec::new();
        self.flatten_into(&FieldPath::root(), &mut out);
        out
    }

    fn flatten_into(&self, prefix: &FieldPath, out: &mut Vec<(FieldPath, String)>) {
        if let Some(message) = &self.non_field {
            out.push((prefix.clone(), message.clone()));
        }
        for (segment, child) in &self.children {
            let path = match segment {
                Segment::Field(name) => prefix.child(name.clone()),
                Segment::Index(i) => prefix.index(*i),
            };
            child.flatten_into(&path, out);
        }
    }
}
