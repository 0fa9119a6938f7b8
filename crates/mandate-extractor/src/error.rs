//! Error types for the extraction pipeline

use mandate_parser::ParseIssue;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document contained lines matching no requirement template
    #[error("document contains {} malformed line(s), first at line {}", .0.len(), first_line(.0))]
    Malformed(Vec<ParseIssue>),

    /// Configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn first_line(issues: &[ParseIssue]) -> usize {
    issues.first().map(|issue| issue.line).unwrap_or(0)
}

/// Configuration failed type or range checks
///
/// Carries every offending field name so callers can report all problems
/// at once instead of fixing them one by one.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid configuration: {message}")]
pub struct ConfigError {
    /// Summary of what failed
    pub message: String,
    /// Every field that failed validation
    pub invalid_fields: Vec<String>,
}

impl ConfigError {
    /// Build an error from the offending field names
    pub fn for_fields(invalid_fields: Vec<String>) -> Self {
        Self {
            message: format!("invalid fields: {}", invalid_fields.join(", ")),
            invalid_fields,
        }
    }

    /// Build an error with a free-form message and no field list
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            invalid_fields: Vec::new(),
        }
    }
}
