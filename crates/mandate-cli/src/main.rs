//! Mandate - command-line interface for EARS requirement extraction.

use clap::Parser;
use mandate_cli::commands;
use mandate_cli::{Cli, Command, Config, Formatter};
use mandate_extractor::Processor;
use tracing::Level;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> mandate_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Library crates log through tracing; keep them quiet unless asked
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    // Load config, preferring an explicit path over the discovered ones
    let config = Config::load(cli.config.as_deref())?;

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(color_enabled);

    // Handle commands
    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, &formatter),
        Command::Validate(args) => commands::execute_validate(args, cli.verbose, &formatter),
        Command::Analyze(args) => {
            let processor = Processor::new(config.pipeline);
            commands::execute_analyze(args, &processor, &formatter)
        }
        Command::Export(args) => {
            let processor = Processor::new(config.pipeline);
            commands::execute_export(args, &processor, &formatter)
        }
        Command::Diagram(args) => commands::execute_diagram(args, &formatter),
        Command::Batch(args) => commands::execute_batch(args, config.pipeline, &formatter).await,
    }
}
