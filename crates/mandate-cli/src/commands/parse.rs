//! Parse command implementation.

use crate::cli::{ParseArgs, ParseFormat};
use crate::error::Result;
use crate::output::Formatter;
use mandate_parser::parse_document;
use std::fs;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, formatter: &Formatter) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;
    let document = parse_document(&text);

    if !document.success() {
        super::print_parse_issues("Parsing failed", &document.issues, formatter);
        return Err(super::malformed_error(&args.file, document.issues.len()));
    }

    match args.format {
        ParseFormat::Table => println!("{}", formatter.record_table(&document.records)),
        ParseFormat::Json => println!("{}", serde_json::to_string_pretty(&document.records)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::path::PathBuf;

    fn write_document(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("spec.aears");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(
            &dir,
            "The system shall store audit records\n\
             When login fails the system shall lock the account",
        );

        let args = ParseArgs {
            file,
            format: ParseFormat::Table,
        };
        let result = execute_parse(args, &Formatter::new(false));
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_json_format() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(&dir, "The system shall store audit records");

        let args = ParseArgs {
            file,
            format: ParseFormat::Json,
        };
        let result = execute_parse(args, &Formatter::new(false));
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_malformed_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(&dir, "this is not a requirement");

        let args = ParseArgs {
            file,
            format: ParseFormat::Table,
        };
        let result = execute_parse(args, &Formatter::new(false));
        assert!(matches!(result, Err(CliError::DocumentInvalid(_))));
    }

    #[test]
    fn test_parse_missing_file_fails() {
        let args = ParseArgs {
            file: PathBuf::from("/nonexistent/spec.aears"),
            format: ParseFormat::Table,
        };
        let result = execute_parse(args, &Formatter::new(false));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
