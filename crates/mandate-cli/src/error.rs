//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Extraction pipeline error
    #[error("Extraction error: {0}")]
    Extraction(#[from] mandate_extractor::ExtractorError),

    /// Batch processing error
    #[error("Batch error: {0}")]
    Batch(#[from] mandate_batch::BatchError),

    /// Record validation transport error
    #[error("Validation error: {0}")]
    Gatekeeper(#[from] mandate_gatekeeper::GatekeeperError),

    /// Export rendering error
    #[error("Report error: {0}")]
    Report(#[from] mandate_report::ReportError),

    /// A document failed parsing or validation; details were already printed
    #[error("{0}")]
    DocumentInvalid(String),

    /// Some documents in a batch failed
    #[error("{failed} of {total} documents failed")]
    BatchIncomplete {
        /// Documents whose extraction failed
        failed: usize,

        /// Documents submitted
        total: usize,
    },
}
