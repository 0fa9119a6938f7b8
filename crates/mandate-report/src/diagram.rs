//! PlantUML use case diagrams and text reports from parsed records

use mandate_domain::{RequirementKind, RequirementRecord};

/// Switches for the PlantUML renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Emit the diagram title line
    pub include_title: bool,

    /// Emit a note block with per-pattern counts
    pub include_statistics: bool,

    /// Emit actor-to-use-case edges
    pub include_relationships: bool,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            include_title: true,
            include_statistics: false,
            include_relationships: true,
        }
    }
}

/// Render parsed requirements as a PlantUML use case diagram
///
/// Actors are the unique entities, use cases the functionality clauses,
/// and edge styles encode the requirement kind.
pub fn generate_plantuml(records: &[RequirementRecord], options: &DiagramOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("@startuml".to_string());
    lines.push(String::new());

    if options.include_title {
        lines.push("title Requirements Use Case Diagram".to_string());
        lines.push(String::new());
    }

    let actors = extract_actors(records);
    let use_cases = extract_use_cases(records);

    if !actors.is_empty() {
        lines.push("!-- Actors --".to_string());
        for actor in &actors {
            lines.push(format!(
                "actor \"{}\" as {}",
                sanitize_label(actor),
                actor_alias(actor)
            ));
        }
        lines.push(String::new());
    }

    if !use_cases.is_empty() {
        lines.push("!-- Use Cases --".to_string());
        for (index, record) in use_cases.iter().enumerate() {
            lines.push(format!(
                "usecase \"{}\" as UC{}",
                sanitize_label(&record.functionality),
                index + 1
            ));
        }
        lines.push(String::new());
    }

    if options.include_relationships && !use_cases.is_empty() {
        lines.push("!-- Relationships --".to_string());
        for (index, record) in use_cases.iter().enumerate() {
            lines.push(format!(
                "{} {} UC{}",
                actor_alias(&record.entity),
                relationship_arrow(record.kind),
                index + 1
            ));
        }
        lines.push(String::new());
    }

    if options.include_statistics {
        lines.push("!-- Statistics --".to_string());
        lines.push("note right".to_string());
        lines.push("Requirements Statistics:".to_string());
        for kind in RequirementKind::ALL {
            let count = records.iter().filter(|r| r.kind == kind).count();
            if count > 0 {
                lines.push(format!("{}: {}", kind.code(), count));
            }
        }
        lines.push("end note".to_string());
        lines.push(String::new());
    }

    lines.push("@enduml".to_string());

    lines.join("\n")
}

/// Render a plain-text analysis report over parsed requirements
pub fn generate_text_report(records: &[RequirementRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== EARS Requirements Analysis Report ===".to_string());
    lines.push(String::new());

    lines.push(format!("Total Requirements: {}", records.len()));
    lines.push(String::new());

    lines.push("Requirements by Type:".to_string());
    for kind in RequirementKind::ALL {
        let count = records.iter().filter(|r| r.kind == kind).count();
        if count > 0 {
            lines.push(format!("  {}: {}", kind.code(), count));
        }
    }
    lines.push(String::new());

    let actors = extract_actors(records);
    lines.push(format!("Actors Identified: {}", actors.len()));
    for actor in &actors {
        lines.push(format!("  - {}", actor));
    }
    lines.push(String::new());

    let use_cases = extract_use_cases(records);
    lines.push(format!("Use Cases Identified: {}", use_cases.len()));
    for (index, record) in use_cases.iter().enumerate() {
        lines.push(format!(
            "  {}. {} -> {}",
            index + 1,
            record.entity,
            record.functionality
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Unique non-empty entities, in first-seen order
fn extract_actors(records: &[RequirementRecord]) -> Vec<&str> {
    let mut actors: Vec<&str> = Vec::new();
    for record in records {
        if !record.entity.is_empty() && !actors.contains(&record.entity.as_str()) {
            actors.push(&record.entity);
        }
    }
    actors
}

/// Records with both an entity and a functionality clause
fn extract_use_cases(records: &[RequirementRecord]) -> Vec<&RequirementRecord> {
    records
        .iter()
        .filter(|r| !r.entity.is_empty() && !r.functionality.is_empty())
        .collect()
}

fn sanitize_label(text: &str) -> String {
    text.replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn actor_alias(name: &str) -> String {
    let mut alias: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if alias.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        alias.insert(0, '_');
    }
    alias
}

fn relationship_arrow(kind: RequirementKind) -> &'static str {
    match kind {
        RequirementKind::Ubiquitous => "-->",
        RequirementKind::EventDriven => "..>",
        RequirementKind::Unwanted => "--x",
        RequirementKind::StateDriven => "==>",
        RequirementKind::Optional => "-.>",
        RequirementKind::Hybrid => "-->",
    }
}
