//! Renderers from extraction results to the five output formats

use crate::error::ReportError;
use mandate_domain::{Category, RequirementKind};
use mandate_extractor::{
    CoverageReport, ExtractionResult, ProcessedRequirement, QualityMetrics, RequirementGroup,
};
use std::collections::HashMap;

/// Serialize a full extraction result as JSON
pub fn export_json(result: &ExtractionResult, pretty: bool) -> Result<String, ReportError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Render a compact sectioned summary of the result
pub fn export_structured(result: &ExtractionResult) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push("## Summary".to_string());
    sections.push(format!(
        "Total Requirements: {}",
        result.requirements.len()
    ));
    sections.push(format!(
        "Quality Score: {:.2}",
        result.metrics.quality_score
    ));
    sections.push(format!(
        "Overall Coverage: {:.1}%",
        result.coverage.overall_coverage
    ));
    sections.push(String::new());

    sections.push("## Requirements".to_string());
    for req in &result.requirements {
        sections.push(format!("### {} ({})", req.id, req.pattern));
        sections.push(format!("**Category:** {}", req.category));
        sections.push(format!("**Priority:** {}", req.priority));
        sections.push(format!("**Confidence:** {:.0}%", req.confidence * 100.0));
        if let Some(trigger) = &req.trigger {
            sections.push(format!("**Trigger:** {}", trigger));
        }
        sections.push(format!("**Response:** {}", req.response));
        sections.push(String::new());
    }

    sections.push("## Groups".to_string());
    for group in &result.groups {
        sections.push(format!("### {} ({})", group.name, group.theme));
        sections.push(format!("Requirements: {}", group.members.join(", ")));
        sections.push(String::new());
    }

    sections.join("\n")
}

/// Render a full analysis report as Markdown
pub fn export_markdown(result: &ExtractionResult) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push("# Requirements Analysis Report".to_string());
    sections.push(String::new());

    sections.push("## Executive Summary".to_string());
    sections.push(executive_summary(result));
    sections.push(String::new());

    sections.push("## Quality Metrics".to_string());
    sections.push(format_quality_metrics(&result.metrics));
    sections.push(String::new());

    sections.push("## Coverage Analysis".to_string());
    sections.push(format_coverage(&result.coverage));
    sections.push(String::new());

    sections.push("## Detailed Requirements".to_string());
    sections.push(format_detailed_requirements(&result.requirements));
    sections.push(String::new());

    if !result.groups.is_empty() {
        sections.push("## Requirements Groups".to_string());
        sections.push(format_groups(&result.groups));
        sections.push(String::new());
    }

    sections.join("\n")
}

/// Render requirements as CSV rows with a fixed header
pub fn export_csv(result: &ExtractionResult) -> String {
    let mut lines = vec!["ID,Pattern,Category,Priority,Confidence,Trigger,Response".to_string()];

    for req in &result.requirements {
        lines.push(format!(
            "{},{},{},{},{:.0}%,{},{}",
            req.id,
            req.pattern,
            req.category,
            req.priority,
            req.confidence * 100.0,
            csv_quote(req.trigger.as_deref().unwrap_or("")),
            csv_quote(&req.response),
        ));
    }

    lines.join("\n")
}

/// Render the full result as an XML document
pub fn export_xml(result: &ExtractionResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string());
    lines.push("<requirements-analysis>".to_string());

    lines.push("  <metadata>".to_string());
    lines.push(format!(
        "    <total-requirements>{}</total-requirements>",
        result.metrics.total_requirements
    ));
    lines.push(format!(
        "    <valid-requirements>{}</valid-requirements>",
        result.metrics.valid_requirements
    ));
    lines.push(format!(
        "    <quality-score>{:.3}</quality-score>",
        result.metrics.quality_score
    ));
    lines.push(format!(
        "    <overall-coverage>{:.1}</overall-coverage>",
        result.coverage.overall_coverage
    ));
    lines.push("  </metadata>".to_string());

    lines.push("  <requirements>".to_string());
    for req in &result.requirements {
        lines.push("    <requirement>".to_string());
        lines.push(format!("      <id>{}</id>", escape_xml(&req.id)));
        lines.push(format!(
            "      <pattern>{}</pattern>",
            escape_xml(req.pattern.code())
        ));
        lines.push(format!(
            "      <category>{}</category>",
            escape_xml(req.category.as_str())
        ));
        lines.push(format!(
            "      <priority>{}</priority>",
            escape_xml(req.priority.as_str())
        ));
        lines.push(format!("      <confidence>{:.3}</confidence>", req.confidence));
        if let Some(trigger) = &req.trigger {
            lines.push(format!("      <trigger>{}</trigger>", escape_xml(trigger)));
        }
        lines.push(format!(
            "      <response>{}</response>",
            escape_xml(&req.response)
        ));
        lines.push("    </requirement>".to_string());
    }
    lines.push("  </requirements>".to_string());

    lines.push("  <groups>".to_string());
    for group in &result.groups {
        lines.push("    <group>".to_string());
        lines.push(format!(
            "      <name>{}</name>",
            escape_xml(group.name.as_str())
        ));
        lines.push(format!("      <theme>{}</theme>", escape_xml(&group.theme)));
        lines.push("      <member-requirements>".to_string());
        for member in &group.members {
            lines.push(format!(
                "        <requirement-id>{}</requirement-id>",
                escape_xml(member)
            ));
        }
        lines.push("      </member-requirements>".to_string());
        lines.push("    </group>".to_string());
    }
    lines.push("  </groups>".to_string());

    lines.push("</requirements-analysis>".to_string());
    lines.join("\n")
}

fn executive_summary(result: &ExtractionResult) -> String {
    let total = result.requirements.len();
    let valid = result.metrics.valid_requirements;
    let valid_share = if total == 0 {
        0.0
    } else {
        valid as f64 / total as f64 * 100.0
    };
    let coverage = result.coverage.overall_coverage;
    let reach = if coverage > 80.0 {
        "comprehensive"
    } else if coverage > 60.0 {
        "adequate"
    } else {
        "limited"
    };

    [
        format!(
            "This analysis covers {} requirements with an overall quality score of {:.2}.",
            total, result.metrics.quality_score
        ),
        format!(
            "{} requirements ({:.0}%) meet quality thresholds.",
            valid, valid_share
        ),
        format!(
            "Domain coverage stands at {:.1}%, indicating {} coverage.",
            coverage, reach
        ),
    ]
    .join(" ")
}

fn format_quality_metrics(metrics: &QualityMetrics) -> String {
    let mut lines = vec![
        format!("- **Total Requirements:** {}", metrics.total_requirements),
        format!("- **Valid Requirements:** {}", metrics.valid_requirements),
        format!(
            "- **Average Confidence:** {:.1}%",
            metrics.average_confidence * 100.0
        ),
        format!("- **Overall Quality Score:** {:.2}", metrics.quality_score),
        String::new(),
        "### Pattern Distribution".to_string(),
    ];

    for kind in RequirementKind::ALL {
        if let Some(count) = metrics.pattern_distribution.get(&kind) {
            let percentage = *count as f64 / metrics.total_requirements as f64 * 100.0;
            lines.push(format!("- **{}:** {} ({:.1}%)", kind, count, percentage));
        }
    }

    lines.join("\n")
}

fn format_coverage(coverage: &CoverageReport) -> String {
    let mut lines = vec![
        format!("**Overall Coverage:** {:.1}%", coverage.overall_coverage),
        String::new(),
        "### Domain Coverage".to_string(),
    ];

    for category in Category::ALL {
        if let Some(percentage) = coverage.domain_coverage.get(&category) {
            lines.push(format!("- **{}:** {:.1}%", category, percentage));
        }
    }

    lines.push(String::new());
    lines.push("### Pattern Coverage".to_string());

    for kind in RequirementKind::ALL {
        if let Some(percentage) = coverage.pattern_coverage.get(&kind) {
            lines.push(format!("- **{}:** {:.1}%", kind, percentage));
        }
    }

    lines.join("\n")
}

fn format_detailed_requirements(requirements: &[ProcessedRequirement]) -> String {
    // Group by category, keeping first-appearance order for the sections
    let mut order: Vec<Category> = Vec::new();
    let mut grouped: HashMap<Category, Vec<&ProcessedRequirement>> = HashMap::new();
    for req in requirements {
        if !grouped.contains_key(&req.category) {
            order.push(req.category);
        }
        grouped.entry(req.category).or_default().push(req);
    }

    let mut lines: Vec<String> = Vec::new();
    for category in order {
        lines.push(format!(
            "### {} Requirements",
            capitalize(category.as_str())
        ));
        lines.push(String::new());

        for req in &grouped[&category] {
            lines.push(format!("#### {}", req.id));
            lines.push(format!("**Pattern:** {}", req.pattern));
            lines.push(format!("**Priority:** {}", req.priority));
            lines.push(format!("**Confidence:** {:.0}%", req.confidence * 100.0));
            if let Some(trigger) = &req.trigger {
                lines.push(format!("**Trigger:** {}", trigger));
            }
            lines.push(format!("**Response:** {}", req.response));
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

fn format_groups(groups: &[RequirementGroup]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for group in groups {
        lines.push(format!("### {}", group.name));
        lines.push(format!("**Theme:** {}", group.theme));
        lines.push(format!("**Requirements:** {}", group.members.len()));
        lines.push(format!("**Members:** {}", group.members.join(", ")));
        lines.push(String::new());
    }

    lines.join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
