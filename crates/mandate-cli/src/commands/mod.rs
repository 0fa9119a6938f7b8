//! Command implementations.

pub mod analyze;
pub mod batch;
pub mod diagram;
pub mod export;
pub mod parse;
pub mod validate;

pub use self::analyze::execute_analyze;
pub use self::batch::execute_batch;
pub use self::diagram::execute_diagram;
pub use self::export::execute_export;
pub use self::parse::execute_parse;
pub use self::validate::execute_validate;

use crate::error::{CliError, Result};
use crate::output::Formatter;
use mandate_extractor::{ExtractionResult, ExtractorError, ProcessingOptions, Processor};
use mandate_parser::ParseIssue;
use std::fs;
use std::path::Path;

/// Print the malformed-line listing for a failed parse.
pub(crate) fn print_parse_issues(headline: &str, issues: &[ParseIssue], formatter: &Formatter) {
    eprintln!("{}", formatter.error(headline));
    eprintln!();
    eprintln!("Errors:");
    for issue in issues {
        eprintln!("  Line {}: {}", issue.line, issue.message);
    }
}

/// The error carried back to `main` after a malformed-line listing.
pub(crate) fn malformed_error(file: &Path, count: usize) -> CliError {
    CliError::DocumentInvalid(format!("{} malformed line(s) in {}", count, file.display()))
}

/// Read a document and run the extraction pipeline on it.
///
/// Malformed lines are listed on stderr before the error is returned, so
/// callers never unpack [`ExtractorError::Malformed`] themselves.
pub(crate) fn extract_document(
    processor: &Processor,
    file: &Path,
    options: &ProcessingOptions,
    formatter: &Formatter,
) -> Result<ExtractionResult> {
    let text = fs::read_to_string(file)?;
    match processor.extract(&text, options) {
        Ok(result) => Ok(result),
        Err(ExtractorError::Malformed(issues)) => {
            print_parse_issues("Parsing failed", &issues, formatter);
            Err(malformed_error(file, issues.len()))
        }
        Err(e) => Err(e.into()),
    }
}
