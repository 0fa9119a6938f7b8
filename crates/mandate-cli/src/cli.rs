//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mandate CLI - Extract and classify EARS requirements.
#[derive(Debug, Parser)]
#[command(name = "mandate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output and logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a requirements document and print its records
    Parse(ParseArgs),

    /// Validate a requirements document or a single line
    Validate(ValidateArgs),

    /// Run the extraction pipeline and report quality and coverage
    Analyze(AnalyzeArgs),

    /// Run the extraction pipeline and render the result
    Export(ExportArgs),

    /// Generate a PlantUML use-case diagram or a text report
    Diagram(DiagramArgs),

    /// Process several requirements documents as a batch
    Batch(BatchArgs),
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Requirements document to parse
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: ParseFormat,
}

/// Parse output options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ParseFormat {
    /// Record table (default)
    Table,
    /// Parsed records as JSON
    Json,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Requirements document to validate
    #[arg(required_unless_present = "line", conflicts_with = "line")]
    pub file: Option<PathBuf>,

    /// Validate a single requirement line instead of a file
    #[arg(short, long)]
    pub line: Option<String>,

    /// Apply the strict validation profile
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Requirements document to analyze
    pub file: PathBuf,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Requirements document to export
    pub file: PathBuf,

    /// Output format (defaults to the configured pipeline format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Export format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// JSON document
    Json,
    /// Structured text sections
    Structured,
    /// Markdown analysis report
    Markdown,
    /// CSV rows
    Csv,
    /// XML document
    Xml,
}

/// Arguments for the diagram command.
#[derive(Debug, Parser)]
pub struct DiagramArgs {
    /// Requirements document to diagram
    pub file: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Produce a text analysis report instead of PlantUML
    #[arg(long)]
    pub report: bool,

    /// Include a per-pattern statistics note
    #[arg(long)]
    pub statistics: bool,

    /// Omit the diagram title
    #[arg(long)]
    pub no_title: bool,

    /// Omit actor-to-use-case relationships
    #[arg(long)]
    pub no_relationships: bool,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Requirements documents to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum concurrent extractions
    #[arg(short = 'n', long, default_value = "4")]
    pub concurrency: usize,

    /// Combine all documents into one result
    #[arg(long)]
    pub combine: bool,
}

impl From<mandate_extractor::OutputFormat> for ExportFormat {
    fn from(format: mandate_extractor::OutputFormat) -> Self {
        match format {
            mandate_extractor::OutputFormat::Json => ExportFormat::Json,
            mandate_extractor::OutputFormat::Structured => ExportFormat::Structured,
            mandate_extractor::OutputFormat::Markdown => ExportFormat::Markdown,
        }
    }
}
