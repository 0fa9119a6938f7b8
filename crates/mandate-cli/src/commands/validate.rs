//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use mandate_domain::{RequirementKind, RequirementRecord};
use mandate_gatekeeper::{Gatekeeper, ValidationConfig, ValidationReport};
use mandate_parser::parse_document;
use std::collections::HashMap;
use std::fs;

/// Execute the validate command.
///
/// With `--line` the gatekeeper checks a single candidate requirement;
/// otherwise every record in the file is validated and parse failures
/// count as errors. Warnings never affect the exit status.
pub fn execute_validate(args: ValidateArgs, verbose: bool, formatter: &Formatter) -> Result<()> {
    let config = if args.strict {
        ValidationConfig::strict()
    } else {
        ValidationConfig::default()
    };
    let gatekeeper = Gatekeeper::new(config);

    if let Some(line) = &args.line {
        return validate_single_line(&gatekeeper, line, formatter);
    }

    let file = args
        .file
        .ok_or_else(|| CliError::InvalidInput("A file or --line is required".to_string()))?;
    let text = fs::read_to_string(&file)?;
    let document = parse_document(&text);

    let mut errors: Vec<(Option<usize>, String)> = document
        .issues
        .iter()
        .map(|issue| (Some(issue.line), issue.message.clone()))
        .collect();
    let mut warnings: Vec<(Option<usize>, String)> = Vec::new();

    for record in &document.records {
        let report = gatekeeper.validate_record(record);
        errors.extend(report.errors.into_iter().map(|e| (e.line, e.message)));
        warnings.extend(report.warnings.into_iter().map(|w| (w.line, w.message)));
    }

    if errors.is_empty() {
        println!("{}", formatter.success("File validation successful"));
    } else {
        println!("{}", formatter.error("File validation failed"));
        println!();
        println!("Errors:");
        for (line, message) in &errors {
            println!("{}", finding_line(*line, message));
        }
    }

    if !warnings.is_empty() {
        println!();
        println!("Warnings:");
        for (line, message) in &warnings {
            println!("{}", finding_line(*line, message));
        }
    }

    if verbose && errors.is_empty() {
        print_statistics(&document.records);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::DocumentInvalid(format!(
            "{} validation error(s) in {}",
            errors.len(),
            file.display()
        )))
    }
}

fn validate_single_line(gatekeeper: &Gatekeeper, line: &str, formatter: &Formatter) -> Result<()> {
    let report = gatekeeper.validate_line(line);
    print_line_report(&report, formatter);
    if report.valid {
        Ok(())
    } else {
        Err(CliError::DocumentInvalid(
            "requirement line is invalid".to_string(),
        ))
    }
}

fn print_line_report(report: &ValidationReport, formatter: &Formatter) {
    if report.valid {
        println!("{}", formatter.success("Requirement line is valid"));
    } else {
        println!("{}", formatter.error("Requirement line is invalid"));
    }

    if !report.errors.is_empty() {
        println!();
        println!("Errors:");
        for issue in &report.errors {
            println!("{}", finding_line(issue.line, &issue.message));
            if let Some(details) = &issue.details {
                println!("    {}", details);
            }
        }
    }

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for advice in &report.warnings {
            println!("{}", finding_line(advice.line, &advice.message));
            if let Some(suggestion) = &advice.suggestion {
                println!("    {}", suggestion);
            }
        }
    }
}

fn print_statistics(records: &[RequirementRecord]) {
    let mut counts: HashMap<RequirementKind, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.kind).or_insert(0) += 1;
    }

    println!();
    println!("Statistics:");
    println!("  Total requirements: {}", records.len());
    for kind in RequirementKind::ALL {
        println!(
            "  {} ({}): {}",
            kind.code(),
            kind.label(),
            counts.get(&kind).copied().unwrap_or(0)
        );
    }
}

fn finding_line(line: Option<usize>, message: &str) -> String {
    match line {
        Some(line) => format!("  Line {}: {}", line, message),
        None => format!("  {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_document(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("spec.aears");
        fs::write(&path, content).unwrap();
        path
    }

    fn file_args(file: PathBuf) -> ValidateArgs {
        ValidateArgs {
            file: Some(file),
            line: None,
            strict: false,
        }
    }

    #[test]
    fn test_validate_clean_document() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(
            &dir,
            "The system shall authenticate users before granting access\n\
             While ingest runs the system shall store checkpoint data",
        );

        let result = execute_validate(file_args(file), false, &Formatter::new(false));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_warnings_do_not_block() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(&dir, "The ui shall do it");

        let result = execute_validate(file_args(file), false, &Formatter::new(false));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_malformed_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(
            &dir,
            "The system shall store audit records\n\
             this line matches nothing",
        );

        let result = execute_validate(file_args(file), false, &Formatter::new(false));
        assert!(matches!(result, Err(CliError::DocumentInvalid(_))));
    }

    #[test]
    fn test_validate_single_valid_line() {
        let args = ValidateArgs {
            file: None,
            line: Some("The system shall authenticate users before access".to_string()),
            strict: false,
        };

        let result = execute_validate(args, false, &Formatter::new(false));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_single_invalid_line() {
        let args = ValidateArgs {
            file: None,
            line: Some("definitely not a requirement".to_string()),
            strict: false,
        };

        let result = execute_validate(args, false, &Formatter::new(false));
        assert!(matches!(result, Err(CliError::DocumentInvalid(_))));
    }

    #[test]
    fn test_validate_strict_profile_still_passes_clean_input() {
        let args = ValidateArgs {
            file: None,
            line: Some("The system shall persist every audit record durably".to_string()),
            strict: true,
        };

        let result = execute_validate(args, false, &Formatter::new(false));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_verbose_statistics() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(
            &dir,
            "The system shall store audit records\n\
             When login fails the system shall lock the account",
        );

        let result = execute_validate(file_args(file), true, &Formatter::new(false));
        assert!(result.is_ok());
    }
}
