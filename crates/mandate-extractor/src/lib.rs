//! Mandate Extractor
//!
//! Converts requirement documents into classified, scored, aggregated
//! extraction results.
//!
//! # Overview
//!
//! The extractor is the heart of the toolkit. It parses constrained
//! requirement sentences into typed records, assigns each a functional
//! category, priority, and confidence score, groups related requirements,
//! and computes quality metrics and domain/pattern coverage over the set.
//!
//! # Architecture
//!
//! ```text
//! Text → Parser → Categorizer/Scorers → Groups + Metrics + Coverage → ExtractionResult
//! ```
//!
//! # Key Features
//!
//! - **Pattern decomposition**: six sentence templates with fixed precedence
//! - **Classification**: keyword-driven category assignment per requirement
//! - **Scoring**: kind-based priority and completeness-based confidence
//! - **Aggregation**: theme groups, quality metrics, coverage percentages
//! - **Filtering**: per-call domain selection and result truncation
//!
//! # Example Usage
//!
//! ```
//! use mandate_extractor::{Processor, ProcessingOptions};
//!
//! let processor = Processor::default();
//! let text = "The system shall store audit records\n\
//!             When login fails the system shall lock the account";
//!
//! let result = processor.extract(text, &ProcessingOptions::default())?;
//!
//! assert_eq!(result.requirements.len(), 2);
//! assert!(result.metrics.quality_score > 0.0);
//! # Ok::<(), mandate_extractor::ExtractorError>(())
//! ```

#![warn(missing_docs)]

mod categorize;
mod config;
mod error;
mod grouping;
mod metrics;
mod processor;
mod scoring;
mod types;

pub use categorize::categorize;
pub use config::{OutputFormat, PipelineConfig};
pub use error::{ConfigError, ExtractorError};
pub use grouping::build_groups;
pub use metrics::{calculate_coverage, calculate_metrics};
pub use processor::{requirement_id, Processor};
pub use scoring::{confidence_for, priority_for};
pub use types::{
    CoverageReport, ExtractionResult, ProcessedRequirement, ProcessingOptions, QualityMetrics,
    RequirementGroup,
};
