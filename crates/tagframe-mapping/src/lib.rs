//! Tagframe Mapping
//!
//! Associations between prediction tags and widget options.
//!
//! # Core Concepts
//!
//! - [`PredictionTag`]: a label from an external classification
//!   service; read-only here
//! - [`Association`]: the addressable choice point a tag maps onto
//!   (option, matrix cell, matrix2d column/sub-column/sub-row)
//! - [`MappingEntry`]: one tag-to-option association record
//! - [`MappingSet`]: order-preserving collection with idempotent
//!   add/remove reconciliation
//! - [`possible_mappings`]: the labeled candidates a widget exposes
//!   for mapping, in display order

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod association;
mod entry;
mod enumerate;
mod reconcile;
mod tag;

// Re-exports
pub use association::Association;
pub use entry::MappingEntry;
pub use enumerate::{possible_mappings, PossibleMapping};
pub use reconcile::MappingSet;
pub use tag::PredictionTag;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
