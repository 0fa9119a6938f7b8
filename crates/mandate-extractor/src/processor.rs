//! The extraction pipeline

use crate::categorize::categorize;
use crate::config::PipelineConfig;
use crate::error::ExtractorError;
use crate::grouping::build_groups;
use crate::metrics::{calculate_coverage, calculate_metrics};
use crate::scoring::{confidence_for, priority_for};
use crate::types::{ExtractionResult, ProcessedRequirement, ProcessingOptions};
use mandate_domain::RequirementRecord;
use mandate_parser::parse_document;
use tracing::{debug, info};

/// Stable ordinal id for the requirement at a 0-based index: `req_001`, ...
pub fn requirement_id(index: usize) -> String {
    format!("req_{:03}", index + 1)
}

/// The Processor runs the full extraction pipeline over document text
///
/// Parse, classify, score, filter, group, aggregate. Every call produces a
/// fresh [`ExtractionResult`]; the processor itself holds only
/// configuration and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: PipelineConfig,
}

impl Processor {
    /// Create a processor with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Extract, classify, and aggregate requirements from document text
    ///
    /// A document with malformed lines fails with
    /// [`ExtractorError::Malformed`] carrying every issue, so callers see
    /// all bad lines at once. Empty or all-blank text is not an error; it
    /// yields an empty result with zeroed aggregates.
    pub fn extract(
        &self,
        text: &str,
        options: &ProcessingOptions,
    ) -> Result<ExtractionResult, ExtractorError> {
        let document = parse_document(text);
        if !document.success() {
            return Err(ExtractorError::Malformed(document.issues));
        }

        info!("Processing {} parsed requirements", document.records.len());

        // Ids come from parse order, before filtering, so they stay stable
        // across different domain selections over the same document
        let mut requirements: Vec<ProcessedRequirement> = document
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| self.process_record(index, record))
            .collect();

        if let Some(domains) = &options.domains {
            requirements.retain(|r| domains.contains(&r.category));
        }
        if let Some(max) = options.max_requirements {
            requirements.truncate(max);
        }

        let groups = build_groups(&requirements);
        let metrics = calculate_metrics(&requirements);
        let domains = options
            .domains
            .clone()
            .unwrap_or_else(|| self.config.default_domains.clone());
        let coverage = calculate_coverage(&requirements, &domains);

        debug!(
            "Extraction produced {} requirements in {} groups",
            requirements.len(),
            groups.len()
        );

        Ok(ExtractionResult {
            requirements,
            groups,
            metrics,
            coverage,
        })
    }

    fn process_record(&self, index: usize, record: &RequirementRecord) -> ProcessedRequirement {
        ProcessedRequirement {
            id: requirement_id(index),
            pattern: record.kind,
            trigger: record.trigger().map(str::to_string),
            response: record.functionality.clone(),
            category: categorize(&record.entity, &record.functionality),
            priority: priority_for(record.kind),
            confidence: confidence_for(record),
            source: record.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandate_domain::{Category, Priority, RequirementKind};

    #[test]
    fn test_requirement_ids_are_zero_padded() {
        assert_eq!(requirement_id(0), "req_001");
        assert_eq!(requirement_id(9), "req_010");
        assert_eq!(requirement_id(99), "req_100");
        assert_eq!(requirement_id(999), "req_1000");
    }

    #[test]
    fn test_extract_full_pipeline() {
        let processor = Processor::default();
        let text = "The system shall store audit records\n\
                    When login fails the system shall authenticate again\n\
                    The user shall see progress";

        let result = processor.extract(text, &ProcessingOptions::default()).unwrap();

        assert_eq!(result.requirements.len(), 3);
        assert_eq!(result.requirements[0].id, "req_001");
        assert_eq!(result.requirements[0].category, Category::Data);
        assert_eq!(result.requirements[1].category, Category::Security);
        assert_eq!(result.requirements[1].priority, Priority::Medium);
        assert_eq!(result.requirements[2].category, Category::UserInterface);
        assert_eq!(result.metrics.total_requirements, 3);
    }

    #[test]
    fn test_trigger_and_response_derivation() {
        let processor = Processor::default();
        let result = processor
            .extract(
                "When syntax error detected the parser shall report error location",
                &ProcessingOptions::default(),
            )
            .unwrap();

        let requirement = &result.requirements[0];
        assert_eq!(requirement.pattern, RequirementKind::EventDriven);
        assert_eq!(requirement.trigger.as_deref(), Some("syntax error detected"));
        assert_eq!(requirement.response, "report error location");
        assert_eq!(requirement.source.entity, "parser");
    }

    #[test]
    fn test_domain_filter_keeps_original_ids() {
        let processor = Processor::default();
        let text = "The parser shall tokenize aears files\n\
                    The system shall store records";
        let options = ProcessingOptions {
            domains: Some(vec![Category::Data]),
            max_requirements: None,
        };

        let result = processor.extract(text, &options).unwrap();
        assert_eq!(result.requirements.len(), 1);
        // The surviving requirement keeps the id from parse order
        assert_eq!(result.requirements[0].id, "req_002");
    }

    #[test]
    fn test_max_requirements_truncates_after_filtering() {
        let processor = Processor::default();
        let text = "The parser shall tokenize aears files\n\
                    The linter shall flag unused symbols\n\
                    The formatter shall align output";
        let options = ProcessingOptions {
            domains: None,
            max_requirements: Some(2),
        };

        let result = processor.extract(text, &options).unwrap();
        assert_eq!(result.requirements.len(), 2);
        assert_eq!(result.requirements[1].id, "req_002");
    }

    #[test]
    fn test_malformed_document_reports_every_line() {
        let processor = Processor::default();
        let text = "garbage one\nThe parser shall tokenize aears files\ngarbage two";

        let error = processor
            .extract(text, &ProcessingOptions::default())
            .unwrap_err();
        match error {
            ExtractorError::Malformed(issues) => {
                assert_eq!(issues.len(), 2);
                assert_eq!(issues[0].line, 1);
                assert_eq!(issues[1].line, 3);
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_yields_empty_result() {
        let processor = Processor::default();
        let result = processor.extract("", &ProcessingOptions::default()).unwrap();

        assert!(result.requirements.is_empty());
        assert!(result.groups.is_empty());
        assert_eq!(result.metrics.quality_score, 0.0);
        assert_eq!(result.coverage.overall_coverage, 0.0);
    }

    #[test]
    fn test_coverage_uses_configured_default_domains() {
        let config = PipelineConfig {
            default_domains: vec![Category::System, Category::Data],
            ..PipelineConfig::default()
        };
        let processor = Processor::new(config);

        let result = processor
            .extract("The system shall store records", &ProcessingOptions::default())
            .unwrap();
        assert_eq!(result.coverage.domain_coverage.len(), 2);
        assert_eq!(result.coverage.domain_coverage[&Category::Data], 100.0);
    }
}
