//! Assemble requirement documents from raw text

use crate::matcher::match_requirement;
use mandate_domain::{RequirementRecord, SourceLocation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One line that matched no requirement template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseIssue {
    /// 1-based line number in the source text
    pub line: usize,
    /// Human-readable description of the failure
    pub message: String,
    /// The offending line, trimmed
    pub text: String,
}

impl ParseIssue {
    fn for_line(line: usize, trimmed: &str) -> Self {
        Self {
            line,
            message: format!("Malformed requirement: {}", trimmed),
            text: trimmed.to_string(),
        }
    }
}

/// Outcome of parsing a full document
///
/// Malformed lines never abort the parse; each one is recorded as an issue
/// while the well-formed lines still produce records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Successfully matched requirements, in source order
    pub records: Vec<RequirementRecord>,
    /// One issue per malformed line, in source order
    pub issues: Vec<ParseIssue>,
}

impl ParsedDocument {
    /// True when every non-blank line matched a template
    pub fn success(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parse a full document of requirement lines
///
/// Splits on newlines, trims each line, and skips blank lines. Every
/// surviving line either becomes a record (tagged with its source location)
/// or an issue. Empty input yields an empty, successful document.
pub fn parse_document(text: &str) -> ParsedDocument {
    let mut records = Vec::new();
    let mut issues = Vec::new();

    for (index, raw) in text.split('\n').enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let line = index + 1;
        match match_requirement(trimmed) {
            Some(record) => records.push(record.at(SourceLocation::line(line))),
            None => {
                warn!("Line {} matched no requirement template", line);
                issues.push(ParseIssue::for_line(line, trimmed));
            }
        }
    }

    debug!(
        "Parsed document: {} records, {} issues",
        records.len(),
        issues.len()
    );

    ParsedDocument { records, issues }
}
