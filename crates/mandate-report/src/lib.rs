//! Mandate Report
//!
//! Quality analysis, export formats, and diagram generation over
//! extraction results.
//!
//! # Overview
//!
//! This crate sits downstream of the extractor. It reviews an
//! [`ExtractionResult`](mandate_extractor::ExtractionResult) for quality
//! issues and actionable recommendations, renders results as JSON,
//! structured text, Markdown, CSV, or XML, and draws PlantUML use case
//! diagrams from parsed requirement records.
//!
//! # Architecture
//!
//! ```text
//! ExtractionResult → analyze → QualityReport
//!                  → export_* → JSON | structured | Markdown | CSV | XML
//! RequirementRecords → generate_plantuml / generate_text_report
//! ```
//!
//! # Key Features
//!
//! - **Quality review**: aggregate issue detection with severities
//! - **Recommendations**: metric-driven improvement advice
//! - **Five export formats**: machine-readable and human-readable
//! - **Use case diagrams**: kind-aware PlantUML edges per requirement
//!
//! # Example Usage
//!
//! ```
//! use mandate_extractor::{Processor, ProcessingOptions};
//! use mandate_report::{analyze, export_csv};
//!
//! let processor = Processor::default();
//! let result = processor.extract(
//!     "The system shall store audit records",
//!     &ProcessingOptions::default(),
//! )?;
//!
//! let report = analyze(&result);
//! assert_eq!(report.metrics.total_requirements, 1);
//!
//! let csv = export_csv(&result);
//! assert!(csv.starts_with("ID,Pattern,Category,Priority"));
//! # Ok::<(), mandate_extractor::ExtractorError>(())
//! ```

#![warn(missing_docs)]

mod diagram;
mod error;
mod export;
mod quality;

pub use diagram::{generate_plantuml, generate_text_report, DiagramOptions};
pub use error::ReportError;
pub use export::{export_csv, export_json, export_markdown, export_structured, export_xml};
pub use quality::{
    analyze, generate_recommendations, identify_issues, IssueKind, QualityIssue, QualityReport,
    Severity,
};
