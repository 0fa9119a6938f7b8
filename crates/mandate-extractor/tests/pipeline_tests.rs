//! End-to-end tests for the extraction pipeline

use mandate_domain::{Category, Priority, RequirementKind};
use mandate_extractor::{ExtractorError, PipelineConfig, Processor, ProcessingOptions};

const SAMPLE_DOCUMENT: &str = "\
The parser shall tokenize aears files
When syntax error detected the parser shall report error location
The parser shall not crash on malformed input
While parsing active the error handler shall collect issues
If malformed syntax then the parser shall provide recovery suggestions
Where multiple files the processor shall handle batch operations";

#[test]
fn test_all_six_templates_end_to_end() {
    let processor = Processor::default();
    let result = processor
        .extract(SAMPLE_DOCUMENT, &ProcessingOptions::default())
        .unwrap();

    assert_eq!(result.requirements.len(), 6);

    let patterns: Vec<RequirementKind> = result.requirements.iter().map(|r| r.pattern).collect();
    assert_eq!(
        patterns,
        vec![
            RequirementKind::Ubiquitous,
            RequirementKind::EventDriven,
            RequirementKind::Unwanted,
            RequirementKind::StateDriven,
            RequirementKind::Optional,
            RequirementKind::Optional,
        ]
    );

    let ids: Vec<&str> = result.requirements.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["req_001", "req_002", "req_003", "req_004", "req_005", "req_006"]
    );
}

#[test]
fn test_unwanted_requirement_fields() {
    let processor = Processor::default();
    let result = processor
        .extract(
            "The parser shall not crash on malformed input",
            &ProcessingOptions::default(),
        )
        .unwrap();

    let requirement = &result.requirements[0];
    assert_eq!(requirement.pattern, RequirementKind::Unwanted);
    assert_eq!(requirement.response, "crash on malformed input");
    assert_eq!(requirement.priority, Priority::High);
    assert!(requirement.source.negated);
    assert_eq!(requirement.source.entity, "parser");
    assert_eq!(requirement.trigger, None);
}

#[test]
fn test_confidence_bounds_hold_for_every_requirement() {
    let processor = Processor::default();
    let result = processor
        .extract(SAMPLE_DOCUMENT, &ProcessingOptions::default())
        .unwrap();

    for requirement in &result.requirements {
        assert!(
            (0.0..=1.0).contains(&requirement.confidence),
            "confidence out of range for {}",
            requirement.id
        );
    }

    // Triggered requirements score at least as high as untriggered ones
    let plain = result
        .requirements
        .iter()
        .find(|r| r.pattern == RequirementKind::Ubiquitous)
        .unwrap();
    let triggered = result
        .requirements
        .iter()
        .find(|r| r.pattern == RequirementKind::EventDriven)
        .unwrap();
    assert!(triggered.confidence >= plain.confidence);
}

#[test]
fn test_pattern_distribution_sums_to_total() {
    let processor = Processor::default();
    let result = processor
        .extract(SAMPLE_DOCUMENT, &ProcessingOptions::default())
        .unwrap();

    let counted: usize = result.metrics.pattern_distribution.values().sum();
    assert_eq!(counted, result.metrics.total_requirements);
}

#[test]
fn test_groups_cover_every_requirement_exactly_once() {
    let processor = Processor::default();
    let result = processor
        .extract(SAMPLE_DOCUMENT, &ProcessingOptions::default())
        .unwrap();

    let grouped: usize = result.groups.iter().map(|g| g.members.len()).sum();
    assert_eq!(grouped, result.requirements.len());

    for group in &result.groups {
        for member in &group.members {
            assert!(result.requirements.iter().any(|r| &r.id == member));
        }
    }
}

#[test]
fn test_domain_filtering_and_coverage_domains_agree() {
    let processor = Processor::default();
    let text = "The system shall store audit records\n\
                The user shall see progress\n\
                The parser shall tokenize aears files";
    let options = ProcessingOptions {
        domains: Some(vec![Category::Data, Category::UserInterface]),
        max_requirements: None,
    };

    let result = processor.extract(text, &options).unwrap();
    assert_eq!(result.requirements.len(), 2);
    assert_eq!(result.coverage.domain_coverage.len(), 2);
    assert_eq!(result.coverage.domain_coverage[&Category::Data], 50.0);
    assert_eq!(
        result.coverage.domain_coverage[&Category::UserInterface],
        50.0
    );
    assert_eq!(result.coverage.overall_coverage, 50.0);
}

#[test]
fn test_malformed_document_carries_every_issue() {
    let processor = Processor::default();
    let text = "not a requirement\nThe parser shall tokenize aears files\nalso not one";

    match processor.extract(text, &ProcessingOptions::default()) {
        Err(ExtractorError::Malformed(issues)) => {
            assert_eq!(issues.len(), 2);
            assert_eq!(issues[0].line, 1);
            assert_eq!(issues[1].line, 3);
            assert!(issues[0].message.starts_with("Malformed requirement:"));
        }
        other => panic!("expected malformed error, got {:?}", other),
    }
}

#[test]
fn test_empty_document_has_zeroed_aggregates() {
    let processor = Processor::default();
    let result = processor
        .extract("\n  \n", &ProcessingOptions::default())
        .unwrap();

    assert!(result.requirements.is_empty());
    assert_eq!(result.metrics.quality_score, 0.0);
    assert_eq!(result.metrics.average_confidence, 0.0);
    assert_eq!(result.coverage.overall_coverage, 0.0);
}

#[test]
fn test_results_are_deterministic() {
    let processor = Processor::new(PipelineConfig::default());
    let first = processor
        .extract(SAMPLE_DOCUMENT, &ProcessingOptions::default())
        .unwrap();
    let second = processor
        .extract(SAMPLE_DOCUMENT, &ProcessingOptions::default())
        .unwrap();

    assert_eq!(first, second);
}
