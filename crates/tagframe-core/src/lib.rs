//! Tagframe Core
//!
//! Umbrella crate tying the schema, mapping, and form layers together:
//! framework validation against configured limits, conditional-widget
//! resolution, rule evaluation, attribute binding, display
//! projections, codecs, and the tagging workbench that owns it all.
//!
//! # Core Concepts
//!
//! - [`TaggingWorkbench`]: single owner of a framework's tagging state
//! - [`validate_framework`]: structure + limits + conditional checks
//! - [`resolve_conditional`] / [`classify`]: conditional widget
//!   resolution and editable/view-only classification
//! - [`ConditionSet`]: rule evaluation against a parent widget's value
//! - [`validate_attribute`] / [`display_value`]: attribute binding and
//!   the read-only projection path
//! - [`OptionsRepository`]: explicit, injected store of externally
//!   loaded option sets

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod attributes;
mod binding;
mod codec;
mod conditional;
mod conditions;
mod config;
mod display;
mod error;
mod logging;
mod options_repo;
mod validate;
mod workbench;

// Re-exports
pub use attributes::EntryAttributes;
pub use binding::{section_editor_schema, validate_attribute, widget_editor_schema};
pub use codec::{
    read_framework_json, read_framework_yaml, write_framework_json, write_framework_yaml,
};
pub use conditional::{classify, resolve_conditional, Resolution, Visibility, WidgetView};
pub use conditions::{ConditionRule, ConditionSet, Conjunction, Modifier, Operator};
pub use config::CoreConfig;
pub use display::display_value;
pub use error::{AttributeError, CodecError, ConfigError, CoreError};
pub use logging::init_logging;
pub use options_repo::{KeyLabel, OptionsRepository, GEO_AREAS};
pub use validate::validate_framework;
pub use workbench::TaggingWorkbench;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
