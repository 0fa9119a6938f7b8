//! Error types for batch operations

use mandate_extractor::ExtractorError;
use thiserror::Error;

/// Errors that can occur during batch and stream processing
#[derive(Error, Debug)]
pub enum BatchError {
    /// The underlying extraction failed
    #[error(transparent)]
    Extraction(#[from] ExtractorError),

    /// A cache key could not be serialized
    #[error("Cache key error: {0}")]
    CacheKey(#[from] serde_json::Error),

    /// Shared cache state error
    #[error("Cache error: {0}")]
    Cache(String),

    /// A worker task failed before producing a result
    #[error("Worker error for document {index}: {message}")]
    Worker {
        /// Batch position of the document being processed
        index: usize,

        /// Why the worker failed
        message: String,
    },
}
