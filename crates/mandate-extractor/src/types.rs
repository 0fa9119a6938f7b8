//! Result types for the extraction pipeline

use mandate_domain::{Category, Priority, RequirementKind, RequirementRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-call options for an extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Keep only requirements in these domains; also the coverage domain list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<Category>>,

    /// Truncate the processed list to at most this many requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requirements: Option<usize>,
}

/// A requirement after classification and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRequirement {
    /// Stable ordinal identifier (`req_001`, `req_002`, ...)
    ///
    /// Assigned in parse order before any domain filtering, so filtered
    /// results can carry non-contiguous ids.
    pub id: String,

    /// The sentence template the source line matched
    pub pattern: RequirementKind,

    /// Trigger clause derived from the source record, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,

    /// The required behavior (the source record's functionality)
    pub response: String,

    /// Functional domain assigned by the categorizer
    pub category: Category,

    /// Priority derived from the requirement kind
    pub priority: Priority,

    /// Completeness-based confidence in [0, 1]
    pub confidence: f64,

    /// The parsed record this requirement was built from
    pub source: RequirementRecord,
}

/// Requirements sharing a category, labeled with a dominant-pattern theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementGroup {
    /// The shared category
    pub name: Category,

    /// Label in `<category>-<dominant pattern code>` form
    pub theme: String,

    /// Member requirement ids, in insertion order
    pub members: Vec<String>,
}

/// Aggregate quality metrics over a set of processed requirements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Number of requirements measured
    pub total_requirements: usize,

    /// Requirements with confidence strictly above 0.5
    pub valid_requirements: usize,

    /// Mean confidence, 0.0 when the set is empty
    pub average_confidence: f64,

    /// How many requirements matched each pattern
    pub pattern_distribution: HashMap<RequirementKind, usize>,

    /// `(valid / total) * average_confidence`, 0.0 when the set is empty
    pub quality_score: f64,
}

/// Per-domain and per-pattern coverage percentages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Share of requirements per requested domain, 0-100
    pub domain_coverage: HashMap<Category, f64>,

    /// Share of requirements per pattern, 0-100
    pub pattern_coverage: HashMap<RequirementKind, f64>,

    /// Mean of the domain coverage values, 0.0 when empty
    pub overall_coverage: f64,
}

/// Everything one extraction produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Processed requirements, in source order (post-filter)
    pub requirements: Vec<ProcessedRequirement>,

    /// Category groups over the requirements
    pub groups: Vec<RequirementGroup>,

    /// Aggregate quality metrics
    pub metrics: QualityMetrics,

    /// Domain and pattern coverage
    pub coverage: CoverageReport,
}

impl ExtractionResult {
    /// A result with no requirements and zeroed aggregates
    pub fn empty() -> Self {
        Self::default()
    }
}
