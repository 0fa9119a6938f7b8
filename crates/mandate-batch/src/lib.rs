//! Mandate Batch
//!
//! Batch, concurrent, and streaming orchestration over the extraction
//! pipeline.
//!
//! # Overview
//!
//! A [`BatchProcessor`] runs the extraction pipeline across many documents
//! while keeping each document's failure in its own slot. It adds an
//! optional least-recently-used result cache, bounded-concurrency async
//! execution whose output order always matches input order, and a
//! streaming mode that reports the combination of everything processed so
//! far after each document.
//!
//! # Architecture
//!
//! ```text
//! documents → BatchProcessor (Processor + ResultCache) → BatchItems
//!                         └→ stream → combined partial results → callback
//! ```
//!
//! # Key Features
//!
//! - **Failure isolation**: one bad document never aborts the batch
//! - **Result caching**: repeated documents are answered from an LRU cache
//! - **Bounded concurrency**: a semaphore caps in-flight extractions
//! - **Streaming**: incremental combined results with a completion flag
//!
//! # Example Usage
//!
//! ```
//! use mandate_batch::BatchProcessor;
//! use mandate_extractor::ProcessingOptions;
//!
//! let processor = BatchProcessor::default();
//! let documents = vec![
//!     "The system shall store audit records".to_string(),
//!     "When login fails the system shall lock the account".to_string(),
//! ];
//!
//! let items = processor.process_batch(&documents, &ProcessingOptions::default());
//! assert_eq!(items.len(), 2);
//! assert!(items.iter().all(|item| item.outcome.is_ok()));
//! ```

#![warn(missing_docs)]

mod batch;
mod cache;
mod error;
mod stream;

pub use batch::{BatchItem, BatchProcessor};
pub use cache::{CacheStats, ResultCache};
pub use error::BatchError;
pub use stream::combine_results;
