//! Mandate Domain Layer
//!
//! This crate contains the core vocabulary for the requirement extraction
//! pipeline. It defines the requirement kinds, functional categories,
//! priority levels, and the parsed requirement record that every other
//! layer operates on.
//!
//! ## Key Concepts
//!
//! - **RequirementKind**: which of the six sentence templates a line matched
//! - **RequirementRecord**: the typed decomposition of one requirement line
//! - **Category**: the functional domain a requirement belongs to
//! - **Priority**: coarse importance derived from the requirement kind
//!
//! ## Architecture
//!
//! This crate stays dependency-light:
//! - serde only, because records cross process boundaries as JSON
//! - No parsing or scoring logic; those live in the parser and extractor
//! - Pure data types with their intrinsic accessors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod kind;
pub mod priority;
pub mod record;

// Re-exports for convenience
pub use category::Category;
pub use kind::RequirementKind;
pub use priority::Priority;
pub use record::{RequirementRecord, SourceLocation};
