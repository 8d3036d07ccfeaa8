//! Tagframe Form
//!
//! Schema-driven binding between widget definitions and user-entered
//! values: nested field addressing, synchronous rule-based validation,
//! and error trees mirroring the value shape.
//!
//! # Core Concepts
//!
//! - [`FieldPath`]: hierarchical addressing into a nested value tree
//!   (object fields and list indices)
//! - [`Condition`]: one synchronous validation rule (required,
//!   required-string, length/number bounds)
//! - [`FormSchema`]: recursive schema mirroring the value shape
//! - [`ErrorTree`]: recursive error structure mirroring the value
//!   shape, with a non-field slot per node
//! - [`FormState`]: the `{ value, error, pristine }` triple; validation
//!   is deferred to [`FormState::validate`] / [`submit`]
//!
//! Validation never throws: errors are always returned as data.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod condition;
mod error_tree;
mod path;
mod schema;
mod state;
mod submit;

// Re-exports
pub use condition::Condition;
pub use error_tree::ErrorTree;
pub use path::{FieldPath, PathError, Segment};
pub use schema::FormSchema;
pub use state::{FormState, ValidationOutcome};
pub use submit::submit;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
