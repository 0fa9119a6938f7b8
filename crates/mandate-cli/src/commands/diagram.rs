//! Diagram command implementation.

use crate::cli::DiagramArgs;
use crate::error::Result;
use crate::output::Formatter;
use mandate_parser::parse_document;
use mandate_report::{generate_plantuml, generate_text_report, DiagramOptions};
use std::fs;

/// Execute the diagram command.
pub fn execute_diagram(args: DiagramArgs, formatter: &Formatter) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;
    let document = parse_document(&text);

    if !document.success() {
        super::print_parse_issues("Generation failed", &document.issues, formatter);
        return Err(super::malformed_error(&args.file, document.issues.len()));
    }

    let (label, output) = if args.report {
        ("Report", generate_text_report(&document.records))
    } else {
        let options = DiagramOptions {
            include_title: !args.no_title,
            include_statistics: args.statistics,
            include_relationships: !args.no_relationships,
        };
        ("PlantUML", generate_plantuml(&document.records, &options))
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!(
                "{}",
                formatter.success(&format!("{} written to {}", label, path.display()))
            );
        }
        None if output.ends_with('\n') => print!("{}", output),
        None => println!("{}", output),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::path::PathBuf;

    fn write_document(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("spec.aears");
        fs::write(
            &path,
            "The system shall store audit records\n\
             When login fails the system shall lock the account\n\
             The user shall review flagged entries",
        )
        .unwrap();
        path
    }

    fn diagram_args(file: PathBuf, output: Option<PathBuf>) -> DiagramArgs {
        DiagramArgs {
            file,
            output,
            report: false,
            statistics: false,
            no_title: false,
            no_relationships: false,
        }
    }

    #[test]
    fn test_diagram_plantuml_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(&dir);
        let output = dir.path().join("diagram.puml");

        let args = diagram_args(file, Some(output.clone()));
        execute_diagram(args, &Formatter::new(false)).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("@startuml"));
        assert!(written.ends_with("@enduml"));
        assert!(written.contains("actor \"system\" as system"));
    }

    #[test]
    fn test_diagram_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(&dir);
        let output = dir.path().join("report.txt");

        let mut args = diagram_args(file, Some(output.clone()));
        args.report = true;
        execute_diagram(args, &Formatter::new(false)).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("=== EARS Requirements Analysis Report ==="));
        assert!(written.contains("Actors Identified: 2"));
    }

    #[test]
    fn test_diagram_flags_shape_output() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(&dir);
        let output = dir.path().join("diagram.puml");

        let mut args = diagram_args(file, Some(output.clone()));
        args.statistics = true;
        args.no_title = true;
        args.no_relationships = true;
        execute_diagram(args, &Formatter::new(false)).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(!written.contains("title"));
        assert!(written.contains("Requirements Statistics:"));
        assert!(!written.contains("-->"));
    }

    #[test]
    fn test_diagram_malformed_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("spec.aears");
        fs::write(&file, "not a requirement at all").unwrap();

        let args = diagram_args(file, None);
        let result = execute_diagram(args, &Formatter::new(false));
        assert!(matches!(result, Err(CliError::DocumentInvalid(_))));
    }
}
