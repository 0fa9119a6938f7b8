//! Streaming evaluation with incremental combined results

use crate::batch::BatchProcessor;
use mandate_domain::{Category, RequirementKind};
use mandate_extractor::{calculate_metrics, CoverageReport, ExtractionResult, ProcessingOptions};
use std::collections::HashMap;
use tracing::{info, warn};

impl BatchProcessor {
    /// Process documents one at a time, reporting combined progress
    ///
    /// After every document the callback receives the combination of all
    /// results so far and a flag marking the final call. A document that
    /// fails is skipped in the combination but still advances the stream,
    /// so the callback fires exactly once per document. Returns the final
    /// combined result.
    pub fn process_stream<F>(
        &self,
        documents: &[String],
        options: &ProcessingOptions,
        mut on_progress: F,
    ) -> ExtractionResult
    where
        F: FnMut(&ExtractionResult, bool),
    {
        info!("Streaming {} documents", documents.len());

        let mut results = Vec::new();
        let mut combined = ExtractionResult::empty();
        for (index, text) in documents.iter().enumerate() {
            match self.process_one(text, options) {
                Ok(result) => results.push(result),
                Err(e) => warn!("Document {} skipped in stream: {}", index + 1, e),
            }
            combined = combine_results(&results);
            let is_complete = index + 1 == documents.len();
            on_progress(&combined, is_complete);
        }
        combined
    }
}

/// Combine several extraction results into one
///
/// Requirements and groups are concatenated in input order, metrics are
/// recomputed over the union, and coverage percentages are averaged per
/// key across the source results.
pub fn combine_results(results: &[ExtractionResult]) -> ExtractionResult {
    if results.is_empty() {
        return ExtractionResult::empty();
    }
    if results.len() == 1 {
        return results[0].clone();
    }

    let requirements: Vec<_> = results
        .iter()
        .flat_map(|result| result.requirements.iter().cloned())
        .collect();
    let groups: Vec<_> = results
        .iter()
        .flat_map(|result| result.groups.iter().cloned())
        .collect();
    let metrics = calculate_metrics(&requirements);
    let coverage = combine_coverage(results);

    ExtractionResult {
        requirements,
        groups,
        metrics,
        coverage,
    }
}

fn combine_coverage(results: &[ExtractionResult]) -> CoverageReport {
    let mut domain_coverage: HashMap<Category, f64> = HashMap::new();
    let mut pattern_coverage: HashMap<RequirementKind, f64> = HashMap::new();
    let count = results.len() as f64;

    for result in results {
        for (domain, value) in &result.coverage.domain_coverage {
            *domain_coverage.entry(*domain).or_insert(0.0) += value / count;
        }
        for (kind, value) in &result.coverage.pattern_coverage {
            *pattern_coverage.entry(*kind).or_insert(0.0) += value / count;
        }
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
