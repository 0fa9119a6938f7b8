//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::output::Formatter;
use mandate_extractor::{ProcessingOptions, Processor};
use mandate_report::{analyze, Severity};

/// Execute the analyze command.
pub fn execute_analyze(
    args: AnalyzeArgs,
    processor: &Processor,
    formatter: &Formatter,
) -> Result<()> {
    let result = super::extract_document(
        processor,
        &args.file,
        &ProcessingOptions::default(),
        formatter,
    )?;
    let report = analyze(&result);

    println!("{}", formatter.metrics_summary(&result));

    let threshold = processor.config().quality_threshold;
    if result.metrics.quality_score < threshold {
        println!();
        println!(
            "{}",
            formatter.warning(&format!(
                "Quality score {:.2} is below the configured threshold {:.2}",
                result.metrics.quality_score, threshold
            ))
        );
    }

    println!();
    if report.issues.is_empty() {
        println!("{}", formatter.success("No quality issues detected"));
    } else {
        println!("Issues:");
        for issue in &report.issues {
            let line = match issue.severity {
                Severity::High => formatter.error(&issue.message),
                Severity::Medium => formatter.warning(&issue.message),
                Severity::Low => formatter.info(&issue.message),
            };
            println!("  {}", line);
        }
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &report.recommendations {
            println!("  - {}", recommendation);
        }
    }

    Ok(())
}
