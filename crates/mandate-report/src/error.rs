//! Error types for report generation

use thiserror::Error;

/// Errors that can occur while rendering reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
