//! Form schemas
//!
//! Provides [`FormSchema`], the recursive schema mirroring the form
//! value shape. Validation walks the value tree and returns an
//! [`ErrorTree`] of the same shape; it never throws.

use crate::condition::Condition;
use crate::error_tree::ErrorTree;
use indexmap::IndexMap;
use serde_json::Value;

/// Recursive schema over a nested form value
#[derive(Debug, Clone, PartialEq)]
pub enum FormSchema {
    /// Scalar field with its validation conditions
    Leaf(Vec<Condition>),
    /// Object with named fields, in declaration order
    Object(IndexMap<String, FormSchema>),
    /// Homogeneous list; every element validates against `member`
    List(Box<FormSchema>),
}

impl FormSchema {
    /// Leaf with conditions
    #[must_use]
    pub fn leaf(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Leaf(conditions.into_iter().collect())
    }

    /// Leaf with no conditions (always valid)
    #[inline]
    #[must_use]
    pub fn any() -> Self {
        Self::Leaf(Vec::new())
    }

    /// Object schema from (name, schema) pairs
    #[must_use]
    pub fn object<'a>(fields: impl IntoIterator<Item = (&'a str, FormSchema)>) -> Self {
        Self::Object(
            fields
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
        )
    }

    /// List schema over a member schema
    #[inline]
    #[must_use]
    pub fn list(member: FormSchema) -> Self {
        Self::List(Box::new(member))
    }

    /// Validate a value against this schema
    ///
    /// Returns `None` when the value is fully valid; otherwise an
    /// error tree mirroring the value shape. Shape mismatches (object
    /// expected, scalar found) surface as non-field messages at the
    /// mismatching node.
    #[must_use]
    pub fn validate(&self, value: Option<&Value>) -> Option<ErrorTree> {
        let tree = self.validate_node(value);
        if tree.is_empty() {
            None
        } else {
            Some(tree)
        }
    }

    fn validate_node(&self, value: Option<&Value>) -> ErrorTree {
        let mut tree = ErrorTree::new();
        match self {
            Self::Leaf(conditions) => {
                for condition in conditions {
                    if let Some(message) = condition.check(value) {
                        tree.set_non_field(message);
                        break;
                    }
                }
            }
            Self::Object(fields) => match value {
                None | Some(Value::Null) | Some(Value::Object(_)) => {
                    let map = match value {
                        Some(Value::Object(map)) => Some(map),
                        _ => None,
                    };
                    for (name, schema) in fields {
                        let child_value = map.and_then(|m| m.get(name));
                        tree.attach(name.as_str(), schema.validate_node(child_value));
                    }
                }
                Some(_) => tree.set_non_field("expected an object"),
            },
            Self::List(member) => match value {
                None | Some(Value::Null) => {}
                Some(Value::Array(items)) => {
                    for (i, item) in items.iter().enumerate() {
                        tree.attach(i, member.validate_node(Some(item)));
                    }
                }
                Some(_) => tree.set_non_field("expected a list"),
            },
        }
        tree
    }
}
