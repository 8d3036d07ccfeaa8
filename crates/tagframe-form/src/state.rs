//! Form state
//!
//! Provides [`FormState`], the `{ value, error, pristine }` triple
//! threaded through a form's lifetime. Field writes are applied in
//! event order (last write wins on the same path); validation is
//! deferred to [`FormState::validate`].

use crate::error_tree::ErrorTree;
use crate::path::{FieldPath, Segment};
use crate::schema::FormSchema;
use serde_json::Value;
use tracing::trace;

/// Result of a full-form validation walk
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Whether any condition failed
    pub errored: bool,
    /// The error tree; `None` when nothing failed
    pub error: Option<ErrorTree>,
    /// The value that was validated
    pub value: Value,
}

/// Mutable state of one mounted form
///
/// Created per form mount, discarded on submit or cancel.
#[derive(Debug, Clone)]
pub struct FormState {
    value: Value,
    error: Option<ErrorTree>,
    pristine: bool,
}

impl FormState {
    /// Create state around an initial value
    #[must_use]
    pub fn new(initial: Value) -> Self {
        Self {
            value: initial,
            error: None,
            pristine: true,
        }
    }

    /// Current form value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Current error tree, if a validation or server round set one
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&ErrorTree> {
        self.error.as_ref()
    }

    /// Whether no field has been edited since mount
    #[inline]
    #[must_use]
    pub fn pristine(&self) -> bool {
        self.pristine
    }

    /// Value at a nested path, if present
    #[must_use]
    pub fn value_at(&self, path: &FieldPath) -> Option<&Value> {
        let mut current = &self.value;
        for segment in path.iter() {
            current = match (segment, current) {
                (Segment::Field(name), Value::Object(map)) => map.get(name)?,
                (Segment::Index(i), Value::Array(items)) => items.get(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Write a value at a nested path
    ///
    /// Creates intermediate objects and list slots as needed (missing
    /// list slots are padded with null). Marks the form dirty; does
    /// not validate — validation is deferred to submit.
    pub fn set_field_value(&mut self, path: &FieldPath, new_value: Value) {
        trace!(path = %path, "set field value");
        set_at_path(&mut self.value, path.segments(), new_value);
        self.pristine = false;
    }

    /// Validate the full value tree against a schema
    pub fn validate(&self, schema: &FormSchema) -> ValidationOutcome {
        let error = schema.validate(Some(&self.value));
        ValidationOutcome {
            errored: error.is_some(),
            error,
            value: self.value.clone(),
        }
    }

    /// Set the error tree (validation failure or server-side errors)
    pub fn set_error(&mut self, error: ErrorTree) {
        self.error = Some(error);
    }

    /// Clear any error tree
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

fn set_at_path(target: &mut Value, segments: &[Segment], new_value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *target = new_value;
        return;
    };

    match head {
        Segment::Field(name) => {
            if !target.is_object() {
                *target = Value::Object(serde_json::Map::new());
            }
            if let Value::Object(map) = target {
                let slot = map.entry(name.clone()).or_insert(Value::Null);
                set_at_path(slot, rest, new_value);
            }
        }
        Segment::Index(i) => {
            if !target.is_array() {
                *target = Value::Array(Vec::new());
            }
            if let Value::Array(items) = target {
                while items.len() <= *i {
                    items.push(Value::Null);
                }
                set_at_path(&mut items[*i], rest, new_value);
            }
        }
    }
}
