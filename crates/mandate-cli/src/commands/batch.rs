//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use mandate_batch::{combine_results, BatchProcessor};
use mandate_extractor::{ExtractionResult, PipelineConfig, ProcessingOptions};
use std::fs;

/// Execute the batch command.
///
/// Documents run concurrently and every file gets its own status line and
/// summary row. With `--combine` the results merge into one report; when
/// the configuration enables streaming, progress is reported after each
/// document and failed documents are skipped rather than counted.
pub async fn execute_batch(
    args: BatchArgs,
    config: PipelineConfig,
    formatter: &Formatter,
) -> Result<()> {
    let mut documents = Vec::with_capacity(args.files.len());
    for file in &args.files {
        documents.push(fs::read_to_string(file)?);
    }
    let names: Vec<String> = args
        .files
        .iter()
        .map(|file| file.display().to_string())
        .collect();

    let cache_size = config.max_cache_size;
    let streaming = config.enable_streaming;
    let processor = BatchProcessor::new(config);
    if cache_size > 0 {
        processor.enable_cache(cache_size)?;
    }

    let options = ProcessingOptions::default();

    if args.combine {
        if streaming {
            let combined = stream_combined(&processor, &documents, &options, formatter);
            println!("{}", formatter.metrics_summary(&combined));
            report_cache(&processor, cache_size, formatter)?;
            return Ok(());
        }

        let items = processor
            .process_batch_async(documents, &options, args.concurrency)
            .await;
        let total = items.len();
        let successes: Vec<ExtractionResult> = items
            .into_iter()
            .filter_map(|item| item.outcome.ok())
            .collect();
        let failed = total - successes.len();
        if failed > 0 {
            println!(
                "{}",
                formatter.warning(&format!("{} document(s) failed and were skipped", failed))
            );
            println!();
        }

        let combined = combine_results(&successes);
        println!("{}", formatter.metrics_summary(&combined));
        report_cache(&processor, cache_size, formatter)?;

        if failed > 0 {
            return Err(CliError::BatchIncomplete { failed, total });
        }
        return Ok(());
    }

    let items = processor
        .process_batch_async(documents, &options, args.concurrency)
        .await;

    let mut failed = 0;
    for (name, item) in names.iter().zip(&items) {
        match &item.outcome {
            Ok(result) => println!(
                "{}",
                formatter.success(&format!(
                    "{}: {} requirement(s)",
                    name, result.metrics.total_requirements
                ))
            ),
            Err(e) => {
                failed += 1;
                println!("{}", formatter.error(&format!("{}: {}", name, e)));
            }
        }
    }

    println!();
    println!("{}", formatter.batch_table(&names, &items));
    report_cache(&processor, cache_size, formatter)?;

    if failed > 0 {
        return Err(CliError::BatchIncomplete {
            failed,
            total: items.len(),
        });
    }
    Ok(())
}

fn stream_combined(
    processor: &BatchProcessor,
    documents: &[String],
    options: &ProcessingOptions,
    formatter: &Formatter,
) -> ExtractionResult {
    let total = documents.len();
    let mut processed = 0;
    processor.process_stream(documents, options, |partial, is_complete| {
        processed += 1;
        if !is_complete {
            eprintln!(
                "{}",
                formatter.info(&format!(
                    "{}/{} documents processed, {} requirement(s) so far",
                    processed, total, partial.metrics.total_requirements
                ))
            );
        }
    })
}

fn report_cache(
    processor: &BatchProcessor,
    cache_size: usize,
    formatter: &Formatter,
) -> Result<()> {
    if cache_size == 0 {
        return Ok(());
    }
    let stats = processor.cache_stats()?;
    println!();
    println!(
        "{}",
        formatter.info(&format!(
            "Cache: {} hit(s), {} miss(es), {}/{} entries",
            stats.hits, stats.misses, stats.size, stats.max_size
        ))
    );
    Ok(())
}
