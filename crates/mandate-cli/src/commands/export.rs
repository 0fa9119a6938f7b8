//! Export command implementation.

use crate::cli::{ExportArgs, ExportFormat};
use crate::error::Result;
use crate::output::Formatter;
use mandate_extractor::{ProcessingOptions, Processor};
use mandate_report::{export_csv, export_json, export_markdown, export_structured, export_xml};
use std::fs;

/// Execute the export command.
///
/// The format flag wins; otherwise the configured pipeline output format
/// decides, so `mandate.toml` can set a project-wide default.
pub fn execute_export(
    args: ExportArgs,
    processor: &Processor,
    formatter: &Formatter,
) -> Result<()> {
    let result = super::extract_document(
        processor,
        &args.file,
        &ProcessingOptions::default(),
        formatter,
    )?;

    let format = args
        .format
        .unwrap_or_else(|| processor.config().output_format.into());

    let rendered = match format {
        ExportFormat::Json => export_json(&result, true)?,
        ExportFormat::Structured => export_structured(&result),
        ExportFormat::Markdown => export_markdown(&result),
        ExportFormat::Csv => export_csv(&result),
        ExportFormat::Xml => export_xml(&result),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!(
                "{}",
                formatter.success(&format!("Export written to {}", path.display()))
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
