//! Error types for Tagframe Core
//!
//! Provides error handling for:
//! - Framework structural validation
//! - Attribute binding failures
//! - Codec (JSON/YAML) failures
//! - Configuration loading

use tagframe_schema::{SchemaError, WidgetType};

/// Main core error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Framework definition violates a structural invariant
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// An attribute value does not fit its widget
    #[error("attribute error: {0}")]
    Attribute(#[from] AttributeError),

    /// Framework encoding/decoding failed
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A widget lookup by key failed
    #[error("unknown widget: {0}")]
    UnknownWidget(String),

    /// A section or widget title is missing
    #[error("missing title in {0}")]
    EmptyTitle(String),
}

/// Attribute binding failures
///
/// Structural, field-scoped; returned as data, never panicked.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    /// Value shape does not match the widget type
    #[error("type mismatch: widget is {expected}, value is {got}")]
    TypeMismatch {
        expected: WidgetType,
        got: WidgetType,
    },

    /// A referenced key does not exist in the widget's properties
    #[error("unknown key '{key}' in {scope}")]
    UnknownKey { scope: String, key: String },

    /// Number outside the widget's configured bounds
    #[error("value {value} outside bounds [{min:?}, {max:?}]")]
    OutOfBounds {
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },

    /// Range value with start after end
    #[error("range start {start} is after end {end}")]
    InvertedRange { start: String, end: String },

    /// The widget type takes no direct attribute value
    #[error("widget type {0} takes no direct attribute value")]
    NotTaggable(WidgetType),
}

/// Framework codec failures
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// JSON encoding/decoding failed
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding/decoding failed
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// File read failure
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A limit value is unusable (e.g. zero where at least one is needed)
    #[error("invalid limit {name}: {value}")]
    InvalidLimit { name: &'static str, value: usize },
}
