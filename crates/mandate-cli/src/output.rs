//! Output formatting for the CLI.

use colored::*;
use mandate_batch::BatchItem;
use mandate_domain::{RequirementKind, RequirementRecord};
use mandate_extractor::ExtractionResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format parsed requirement records as a table.
    pub fn record_table(&self, records: &[RequirementRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No requirements found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Line", "Pattern", "Entity", "Trigger", "Functionality"]);

        for record in records {
            let line = record
                .location
                .map_or_else(|| "-".to_string(), |location| location.line.to_string());
            let trigger = record.trigger().unwrap_or("-");
            builder.push_record([
                line.as_str(),
                record.kind.code(),
                record.entity.as_str(),
                trigger,
                record.functionality.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format per-document batch outcomes as a table.
    pub fn batch_table(&self, names: &[String], items: &[BatchItem]) -> String {
        if items.is_empty() {
            return self.colorize("No documents processed.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Document", "Requirements", "Confidence", "Status"]);

        for (name, item) in names.iter().zip(items) {
            match &item.outcome {
                Ok(result) => {
                    let requirements = result.metrics.total_requirements.to_string();
                    let confidence = format!("{:.2}", result.metrics.average_confidence);
                    builder.push_record([
                        name.as_str(),
                        requirements.as_str(),
                        confidence.as_str(),
                        "ok",
                    ]);
                }
                Err(_) => {
                    builder.push_record([name.as_str(), "-", "-", "failed"]);
                }
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the metrics and coverage summary for an extraction result.
    pub fn metrics_summary(&self, result: &ExtractionResult) -> String {
        let metrics = &result.metrics;
        let mut lines = vec![
            format!("Total requirements: {}", metrics.total_requirements),
            format!("Valid requirements: {}", metrics.valid_requirements),
            format!("Average confidence: {:.2}", metrics.average_confidence),
            format!("Quality score: {:.2}", metrics.quality_score),
            String::new(),
            "Pattern distribution:".to_string(),
        ];

        for kind in RequirementKind::ALL {
            let count = metrics.pattern_distribution.get(&kind).copied().unwrap_or(0);
            lines.push(format!("  {} ({}): {}", kind.code(), kind.label(), count));
        }

        let covered = RequirementKind::ALL
            .iter()
            .filter(|kind| metrics.pattern_distribution.get(*kind).copied().unwrap_or(0) > 0)
            .count();

        lines.push(String::new());
        lines.push(format!(
            "Pattern coverage: {}/{} ({:.0}%)",
            covered,
            RequirementKind::ALL.len(),
            covered as f64 / RequirementKind::ALL.len() as f64 * 100.0
        ));
        lines.push(format!(
            "Overall coverage: {:.1}%",
            result.coverage.overall_coverage
        ));

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandate_batch::BatchError;
    use mandate_domain::SourceLocation;
    use mandate_extractor::{ProcessingOptions, Processor};

    fn create_test_records() -> Vec<RequirementRecord> {
        vec![
            RequirementRecord::ubiquitous("system", "store audit records").at(SourceLocation::line(1)),
            RequirementRecord::event_driven("login fails", "system", "lock the account")
                .at(SourceLocation::line(2)),
        ]
    }

    #[test]
    fn test_messages_plain_when_color_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("done"), "✓ done");
        assert_eq!(formatter.error("bad"), "✗ bad");
        assert_eq!(formatter.info("note"), "ℹ note");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }

    #[test]
    fn test_record_table_lists_records() {
        let formatter = Formatter::new(false);
        let table = formatter.record_table(&create_test_records());
        assert!(table.contains("Pattern"));
        assert!(table.contains("UB"));
        assert!(table.contains("EV"));
        assert!(table.contains("login fails"));
        assert!(table.contains("store audit records"));
    }

    #[test]
    fn test_record_table_empty() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.record_table(&[]), "No requirements found.");
    }

    #[test]
    fn test_metrics_summary_covers_all_patterns() {
        let processor = Processor::default();
        let result = processor
            .extract(
                "The system shall store audit records\n\
                 When login fails the system shall lock the account",
                &ProcessingOptions::default(),
            )
            .unwrap();

        let formatter = Formatter::new(false);
        let summary = formatter.metrics_summary(&result);
        assert!(summary.contains("Total requirements: 2"));
        assert!(summary.contains("UB (Ubiquitous): 1"));
        assert!(summary.contains("EV (Event-driven): 1"));
        assert!(summary.contains("HY (Hybrid): 0"));
        assert!(summary.contains("Pattern coverage: 2/6 (33%)"));
    }

    #[test]
    fn test_batch_table_marks_failures() {
        let formatter = Formatter::new(false);
        let names = vec!["good.aears".to_string(), "bad.aears".to_string()];
        let items = vec![
            BatchItem {
                index: 0,
                outcome: Ok(ExtractionResult::empty()),
            },
            BatchItem {
                index: 1,
                outcome: Err(BatchError::Worker {
                    index: 1,
                    message: "cancelled".to_string(),
                }),
            },
        ];

        let table = formatter.batch_table(&names, &items);
        assert!(table.contains("good.aears"));
        assert!(table.contains("bad.aears"));
        assert!(table.contains("ok"));
        assert!(table.contains("failed"));
    }
}
