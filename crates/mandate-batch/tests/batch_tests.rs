//! End-to-end batch and streaming tests

use mandate_batch::{combine_results, BatchError, BatchProcessor};
use mandate_extractor::{ExtractorError, PipelineConfig, ProcessingOptions};

fn sample_documents() -> Vec<String> {
    vec![
        "The parser shall tokenize aears files".to_string(),
        "When syntax error detected the parser shall report error location".to_string(),
        "While parsing continues the system shall collect issues".to_string(),
        "The system shall not crash on malformed input".to_string(),
    ]
}

#[test]
fn test_sync_batch_slots_line_up_with_inputs() {
    let processor = BatchProcessor::default();
    let mut documents = sample_documents();
    documents.insert(2, "completely unstructured text".to_string());

    let items = processor.process_batch(&documents, &ProcessingOptions::default());

    assert_eq!(items.len(), 5);
    for (position, item) in items.iter().enumerate() {
        assert_eq!(item.index, position);
    }
    assert!(items[2].outcome.is_err());
    let successes = items.iter().filter(|item| item.outcome.is_ok()).count();
    assert_eq!(successes, 4);
}

#[tokio::test]
async fn test_async_batch_preserves_input_order() {
    let processor = BatchProcessor::default();
    let documents = sample_documents();

    let items = processor
        .process_batch_async(documents.clone(), &ProcessingOptions::default(), 2)
        .await;

    assert_eq!(items.len(), documents.len());
    for (position, item) in items.iter().enumerate() {
        assert_eq!(item.index, position);
        let result = item.outcome.as_ref().unwrap();
        assert_eq!(result.requirements.len(), 1);
    }

    // Slot zero must hold the plain ubiquitous document, not whichever
    // worker finished first
    let first = items[0].outcome.as_ref().unwrap();
    assert_eq!(first.requirements[0].response, "tokenize aears files");
}

#[tokio::test]
async fn test_async_batch_isolates_malformed_documents() {
    let processor = BatchProcessor::default();
    let documents = vec![
        "The parser shall tokenize aears files".to_string(),
        "garbage".to_string(),
        "The linter shall flag unused symbols".to_string(),
    ];

    let items = processor
        .process_batch_async(documents, &ProcessingOptions::default(), 3)
        .await;

    assert!(items[0].outcome.is_ok());
    assert!(matches!(
        items[1].outcome,
        Err(BatchError::Extraction(ExtractorError::Malformed(_)))
    ));
    assert!(items[2].outcome.is_ok());
}

#[tokio::test]
async fn test_async_workers_share_the_cache() {
    let processor = BatchProcessor::default();
    processor.enable_cache(10).unwrap();

    let document = "The system shall store audit records".to_string();
    let documents = vec![document; 4];
    let items = processor
        .process_batch_async(documents, &ProcessingOptions::default(), 2)
        .await;

    assert!(items.iter().all(|item| item.outcome.is_ok()));
    let stats = processor.cache_stats().unwrap();
    // With two permits, at least the last two workers start after a
    // completed insert and must hit
    assert_eq!(stats.size, 1);
    assert_eq!(stats.hits + stats.misses, 4);
    assert!(stats.hits >= 2);
}

#[test]
fn test_cache_capacity_comes_from_config() {
    let config = PipelineConfig::performance();
    let capacity = config.max_cache_size;
    let processor = BatchProcessor::new(config);
    processor.enable_cache(capacity).unwrap();

    let stats = processor.cache_stats().unwrap();
    assert_eq!(stats.max_size, 200);
}

#[test]
fn test_stream_combined_result_grows_per_document() {
    let processor = BatchProcessor::default();
    let documents = sample_documents();

    let mut seen = Vec::new();
    let combined = processor.process_stream(
        &documents,
        &ProcessingOptions::default(),
        |partial, is_complete| {
            seen.push((partial.requirements.len(), is_complete));
        },
    );

    assert_eq!(seen, vec![(1, false), (2, false), (3, false), (4, true)]);
    assert_eq!(combined.requirements.len(), 4);
    assert_eq!(combined.metrics.total_requirements, 4);
}

#[test]
fn test_streaming_twice_doubles_the_combination() {
    let processor = BatchProcessor::default();
    let documents = sample_documents();
    let mut doubled = documents.clone();
    doubled.extend(documents.clone());

    let single = processor.process_stream(&documents, &ProcessingOptions::default(), |_, _| {});
    let twice = processor.process_stream(&doubled, &ProcessingOptions::default(), |_, _| {});

    assert_eq!(
        twice.requirements.len(),
        2 * single.requirements.len()
    );
    assert_eq!(twice.groups.len(), 2 * single.groups.len());
    // Average confidence is invariant under duplication
    assert!(
        (twice.metrics.average_confidence - single.metrics.average_confidence).abs()
            < f64::EPSILON
    );
}

#[test]
fn test_combine_results_is_deterministic() {
    let processor = BatchProcessor::default();
    let items = processor.process_batch(&sample_documents(), &ProcessingOptions::default());
    let results: Vec<_> = items
        .into_iter()
        .map(|item| item.outcome.unwrap())
        .collect();

    let first = combine_results(&results);
    let second = combine_results(&results);
    assert_eq!(first, second);
}
