//! Validation conditions
//!
//! Provides [`Condition`], the closed set of synchronous, rule-based
//! checks a schema leaf can carry. Conditions return messages as data;
//! nothing here throws.

use serde_json::Value;

/// One synchronous validation rule
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Value must be present and non-null
    Required,
    /// Value must be a string that is non-empty after trimming
    RequiredString,
    /// String length must fall within the given bounds (inclusive)
    LengthBounds {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Number must fall within the given bounds (inclusive)
    NumberBounds { min: Option<f64>, max: Option<f64> },
}

impl Condition {
    /// Check a value, returning a message on failure
    ///
    /// `None` as input means the field is absent. Bounds conditions
    /// pass on absent values; pair them with [`Condition::Required`]
    /// when presence is mandatory.
    #[must_use]
    pub fn check(&self, value: Option<&Value>) -> Option<String> {
        match self {
            Self::Required => match value {
                None | Some(Value::Null) => Some("this field is required".to_string()),
                Some(_) => None,
            },
            Self::RequiredString => match value {
                None | Some(Value::Null) => Some("this field is required".to_string()),
                Some(Value::String(s)) if s.trim().is_empty() => {
                    Some("this field is required".to_string())
                }
                Some(Value::String(_)) => None,
                Some(_) => Some("expected a string".to_string()),
            },
            Self::LengthBounds { min, max } => {
                let Some(Value::String(s)) = value else {
                    return None;
                };
                let len = s.chars().count();
                if let Some(min) = min {
                    if len < *min {
                        return Some(format!("must be at least {min} characters"));
                    }
                }
                if let Some(max) = max {
                    if len > *max {
                        return Some(format!("must be at most {max} characters"));
                    }
                }
                None
            }
            Self::NumberBounds { min, max } => {
                let number = match value {
                    Some(Value::Number(n)) => n.as_f64(),
                    _ => None,
                };
                let Some(number) = number else {
                    return None;
                };
                if let Some(min) = min {
                    if number < *min {
                        return Some(format!("must be at least {min}"));
                    }
                }
                if let Some(max) = max {
                    if number > *max {
                        return Some(format!("must be at most {max}"));
                    }
                }
                None
            }
        }
    }
}
