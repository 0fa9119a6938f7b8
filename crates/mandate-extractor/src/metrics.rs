//! Quality metrics and coverage aggregation

use crate::types::{CoverageReport, ProcessedRequirement, QualityMetrics};
use mandate_domain::{Category, RequirementKind};
use std::collections::HashMap;

/// Aggregate quality metrics over a set of processed requirements
///
/// An empty set yields all-zero metrics; every division is guarded so no
/// NaN can escape.
pub fn calculate_metrics(requirements: &[ProcessedRequirement]) -> QualityMetrics {
    let total = requirements.len();
    let valid = requirements.iter().filter(|r| r.confidence > 0.5).count();

    let average_confidence = if total == 0 {
        0.0
    } else {
        requirements.iter().map(|r| r.confidence).sum::<f64>() / total as f64
    };

    let quality_score = if total == 0 {
        0.0
    } else {
        (valid as f64 / total as f64) * average_confidence
    };

    let mut pattern_distribution = HashMap::new();
    for requirement in requirements {
        *pattern_distribution.entry(requirement.pattern).or_insert(0) += 1;
    }

    QualityMetrics {
        total_requirements: total,
        valid_requirements: valid,
        average_confidence,
        pattern_distribution,
        quality_score,
    }
}

/// Coverage percentages over the given domain list and all patterns
///
/// Every requested domain gets an entry, zero-coverage ones included.
/// Pattern coverage always spans all six kinds. The overall figure is the
/// mean of the domain values, 0.0 when the list is empty.
pub fn calculate_coverage(
    requirements: &[ProcessedRequirement],
    domains: &[Category],
) -> CoverageReport {
    let total = requirements.len();

    let mut domain_coverage = HashMap::new();
    for &domain in domains {
        let count = requirements.iter().filter(|r| r.category == domain).count();
        domain_coverage.insert(domain, share(count, total));
    }

    let mut pattern_coverage = HashMap::new();
    for kind in RequirementKind::ALL {
        let count = requirements.iter().filter(|r| r.pattern == kind).count();
        pattern_coverage.insert(kind, share(count, total));
    }

    let overall_coverage = if domain_coverage.is_empty() {
        0.0
    } else {
        domain_coverage.values().sum::<f64>() / domain_coverage.len() as f64
    };

    CoverageReport {
        domain_coverage,
        pattern_coverage,
        overall_coverage,
    }
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
