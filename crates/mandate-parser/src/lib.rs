//! Mandate Parser
//!
//! Turns plain-text requirement statements into typed
//! [`RequirementRecord`](mandate_domain::RequirementRecord)s.
//!
//! ## Overview
//!
//! Requirements follow six constrained sentence templates ("The X shall Y",
//! "When P the X shall Y", ...). The matcher tries the templates in a fixed
//! precedence order and decomposes the first match into its fields. The
//! document builder runs the matcher line by line over a full document,
//! collecting an issue per malformed line instead of aborting, so callers
//! such as editor diagnostics see every problem at once.
//!
//! ## Example
//!
//! ```
//! use mandate_parser::parse_document;
//!
//! let doc = parse_document("The parser shall tokenize input files\n");
//! assert!(doc.success());
//! assert_eq!(doc.records.len(), 1);
//! assert_eq!(doc.records[0].entity, "parser");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod matcher;

pub use document::{parse_document, ParseIssue, ParsedDocument};
pub use matcher::match_requirement;
