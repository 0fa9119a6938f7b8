//! Mandate Gatekeeper
//!
//! Validates requirement lines and records for quality control.
//!
//! The Gatekeeper provides:
//! - Syntax validation (does the line match a requirement template)
//! - Structural validation (are the pattern-specific fields present)
//! - Quality advice (weak language, brevity, ambiguous terms)
//!
//! Errors block validity; warnings only advise. Editor integrations call
//! [`Gatekeeper::validate_line`] per candidate line and render the report
//! as diagnostics.
//!
//! # Examples
//!
//! ```
//! use mandate_gatekeeper::{Gatekeeper, ValidationConfig};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//!
//! let report = gatekeeper.validate_line("The parser shall tokenize aears files");
//! assert!(report.valid);
//!
//! let report = gatekeeper.validate_line("not a requirement");
//! assert!(!report.valid);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, ValidationAdvice, ValidationIssue, ValidationReport};
