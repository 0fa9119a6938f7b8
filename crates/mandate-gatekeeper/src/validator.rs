//! Requirement validation logic

use crate::config::ValidationConfig;
use crate::error::GatekeeperError;
use mandate_domain::{RequirementKind, RequirementRecord};
use mandate_parser::parse_document;
use serde::{Deserialize, Serialize};
use tracing::debug;

const AMBIGUOUS_TERMS: [&str; 4] = ["appropriate", "reasonable", "efficient", "user-friendly"];

/// A validation finding that blocks validity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// What is wrong
    pub message: String,

    /// Additional context for the finding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// 1-based source line, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// A validation finding that advises without blocking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationAdvice {
    /// What could be better
    pub message: String,

    /// How to improve it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// 1-based source line, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Outcome of validating one requirement line or record
///
/// `valid` is true exactly when `errors` is empty; warnings never block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the requirement passed validation
    pub valid: bool,

    /// Findings that block validity
    pub errors: Vec<ValidationIssue>,

    /// Advisory findings
    pub warnings: Vec<ValidationAdvice>,
}

impl ValidationReport {
    fn new(errors: Vec<ValidationIssue>, warnings: Vec<ValidationAdvice>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// The Gatekeeper validates requirements before downstream use
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate one candidate requirement line
    ///
    /// Parse failures and blank input are errors. When the text parses to
    /// several requirements, only the first is validated and a warning
    /// says so.
    pub fn validate_line(&self, text: &str) -> ValidationReport {
        let document = parse_document(text.trim());

        if !document.success() {
            let details = document
                .issues
                .iter()
                .map(|issue| format!("Line {}: {}", issue.line, issue.message))
                .collect::<Vec<_>>()
                .join("; ");
            return ValidationReport::new(
                vec![ValidationIssue {
                    message: "Failed to parse requirement".to_string(),
                    details: Some(details),
                    line: document.issues.first().map(|issue| issue.line),
                }],
                Vec::new(),
            );
        }

        if document.records.is_empty() {
            return ValidationReport::new(
                vec![ValidationIssue {
                    message: "No valid requirements found".to_string(),
                    details: Some(
                        "Input does not contain recognizable requirement patterns".to_string(),
                    ),
                    line: None,
                }],
                Vec::new(),
            );
        }

        let mut warnings = Vec::new();
        if document.records.len() > 1 {
            debug!(
                "Validation input contained {} requirements, using the first",
                document.records.len()
            );
            warnings.push(ValidationAdvice {
                message: "Multiple requirements found, validating first one only".to_string(),
                suggestion: Some(
                    "Split into separate validation calls for each requirement".to_string(),
                ),
                line: None,
            });
        }

        let record_report = self.validate_record(&document.records[0]);
        warnings.extend(record_report.warnings);
        ValidationReport::new(record_report.errors, warnings)
    }

    /// Validate an already-parsed requirement record
    ///
    /// Catches structural problems the matcher itself can never produce,
    /// such as an event-driven record arriving over the wire without its
    /// precondition.
    pub fn validate_record(&self, record: &RequirementRecord) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let line = record.location.map(|location| location.line);

        self.check_basic_fields(record, line, &mut errors, &mut warnings);
        self.check_pattern_fields(record, line, &mut errors);

        if self.config.check_weak_language {
            self.check_weak_language(record, line, &mut warnings);
        }
        if self.config.check_brevity {
            self.check_brevity(record, line, &mut warnings);
        }
        if self.config.check_ambiguous_terms {
            self.check_ambiguous_terms(record, line, &mut warnings);
        }

        ValidationReport::new(errors, warnings)
    }

    /// Quick boolean gate: does this text hold at least one valid requirement
    pub fn validate_input(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let document = parse_document(text);
        document.success() && !document.records.is_empty()
    }

    /// Validate a record delivered as JSON, as editor integrations send them
    pub fn validate_serialized(&self, json: &str) -> Result<ValidationReport, GatekeeperError> {
        let record: RequirementRecord =
            serde_json::from_str(json).map_err(|e| GatekeeperError::InvalidRecord(e.to_string()))?;
        Ok(self.validate_record(&record))
    }

    fn check_basic_fields(
        &self,
        record: &RequirementRecord,
        line: Option<usize>,
        errors: &mut Vec<ValidationIssue>,
        warnings: &mut Vec<ValidationAdvice>,
    ) {
        if record.entity.trim().is_empty() {
            errors.push(ValidationIssue {
                message: "Missing entity".to_string(),
                details: Some("Requirements must specify an entity (actor or system)".to_string()),
                line,
            });
        } else if record.entity.len() < self.config.min_entity_length {
            warnings.push(ValidationAdvice {
                message: "Entity name is very short".to_string(),
                suggestion: Some("Consider using more descriptive entity names".to_string()),
                line,
            });
        }

        if record.functionality.trim().is_empty() {
            errors.push(ValidationIssue {
                message: "Missing functionality".to_string(),
                details: Some("Requirements must specify what the entity shall do".to_string()),
                line,
            });
        } else if record.functionality.len() < self.config.min_functionality_length {
            warnings.push(ValidationAdvice {
                message: "Functionality description is very brief".to_string(),
                suggestion: Some(
                    "Consider adding more detail to clarify the requirement".to_string(),
                ),
                line,
            });
        }
    }

    fn check_pattern_fields(
        &self,
        record: &RequirementRecord,
        line: Option<usize>,
        errors: &mut Vec<ValidationIssue>,
    ) {
        match record.kind {
            RequirementKind::EventDriven if record.precondition.is_none() => {
                errors.push(ValidationIssue {
                    message: "Event-driven requirement missing precondition".to_string(),
                    details: Some("EV patterns must specify \"When [precondition]\"".to_string()),
                    line,
                });
            }
            RequirementKind::StateDriven if record.state.is_none() => {
                errors.push(ValidationIssue {
                    message: "State-driven requirement missing state condition".to_string(),
                    details: Some("ST patterns must specify \"While [state]\"".to_string()),
                    line,
                });
            }
            RequirementKind::Optional if record.condition.is_none() => {
                errors.push(ValidationIssue {
                    message: "Option requirement missing condition".to_string(),
                    details: Some(
                        "OP patterns must specify \"If [condition]\" or \"Where [condition]\""
                            .to_string(),
                    ),
                    line,
                });
            }
            _ => {}
        }
    }

    fn check_weak_language(
        &self,
        record: &RequirementRecord,
        line: Option<usize>,
        warnings: &mut Vec<ValidationAdvice>,
    ) {
        if record.functionality.contains("should") || record.functionality.contains("could") {
            warnings.push(ValidationAdvice {
                message: "Weak requirement language detected".to_string(),
                suggestion: Some(
                    "Replace \"should\" or \"could\" with \"shall\" for stronger requirements"
                        .to_string(),
                ),
                line,
            });
        }
    }

    fn check_brevity(
        &self,
        record: &RequirementRecord,
        line: Option<usize>,
        warnings: &mut Vec<ValidationAdvice>,
    ) {
        if record.functionality.split_whitespace().count() < self.config.min_word_count {
            warnings.push(ValidationAdvice {
                message: "Very brief functionality description".to_string(),
                suggestion: Some("Add more detail to make the requirement clearer".to_string()),
                line,
            });
        }
    }

    fn check_ambiguous_terms(
        &self,
        record: &RequirementRecord,
        line: Option<usize>,
        warnings: &mut Vec<ValidationAdvice>,
    ) {
        let functionality = record.functionality.to_lowercase();
        let found: Vec<&str> = AMBIGUOUS_TERMS
            .iter()
            .copied()
            .filter(|term| functionality.contains(term))
            .collect();

        if !found.is_empty() {
            warnings.push(ValidationAdvice {
                message: format!("Ambiguous terms detected: {}", found.join(", ")),
                suggestion: Some("Replace with specific, measurable criteria".to_string()),
                line,
            });
        }
    }
}
