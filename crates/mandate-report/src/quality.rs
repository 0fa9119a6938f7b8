//! Quality issue detection and recommendations

use mandate_domain::{Category, Priority, RequirementKind};
use mandate_extractor::{ExtractionResult, ProcessedRequirement, QualityMetrics};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How strongly a finding should be weighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic or stylistic
    Low,
    /// Worth addressing before sign-off
    Medium,
    /// Likely to cause real project risk
    High,
}

/// Whether a finding blocks or merely advises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Advisory finding
    Warning,
    /// Blocking finding
    Error,
}

/// One quality finding over a set of requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityIssue {
    /// Advisory or blocking
    pub kind: IssueKind,

    /// Human-readable description of the finding
    pub message: String,

    /// The specific requirement concerned, when the finding names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement_id: Option<String>,

    /// Weight of the finding
    pub severity: Severity,
}

/// Quality review of one extraction result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// The metrics the review was computed from
    pub metrics: QualityMetrics,

    /// Findings over the requirement set
    pub issues: Vec<QualityIssue>,

    /// Actionable advice derived from metrics and distribution
    pub recommendations: Vec<String>,
}

/// Review an extraction result for quality issues and advice
pub fn analyze(result: &ExtractionResult) -> QualityReport {
    QualityReport {
        metrics: result.metrics.clone(),
        issues: identify_issues(&result.requirements),
        recommendations: generate_recommendations(&result.metrics, &result.requirements),
    }
}

/// Detect aggregate quality problems in a requirement set
pub fn identify_issues(requirements: &[ProcessedRequirement]) -> Vec<QualityIssue> {
    let mut issues = Vec::new();
    let total = requirements.len();

    let low_confidence = requirements.iter().filter(|r| r.confidence < 0.5).count();
    if low_confidence > 0 {
        issues.push(QualityIssue {
            kind: IssueKind::Warning,
            message: format!("{} requirements have low confidence scores", low_confidence),
            requirement_id: None,
            severity: Severity::Medium,
        });
    }

    if let Some((kind, count)) = dominant_pattern(requirements) {
        if count as f64 / total as f64 > 0.7 {
            issues.push(QualityIssue {
                kind: IssueKind::Warning,
                message: format!("Over 70% of requirements use {} pattern", kind.code()),
                requirement_id: None,
                severity: Severity::Low,
            });
        }
    }

    let has_security = requirements.iter().any(|r| {
        r.category == Category::Security
            || r.response.to_lowercase().contains("security")
            || r.response.to_lowercase().contains("authenticate")
    });
    if !has_security && total > 5 {
        issues.push(QualityIssue {
            kind: IssueKind::Warning,
            message: "No security-related requirements detected".to_string(),
            requirement_id: None,
            severity: Severity::High,
        });
    }

    let vague = requirements
        .iter()
        .filter(|r| r.response.len() < 20 || r.response.split(' ').count() < 3)
        .count();
    if vague as f64 > total as f64 * 0.3 {
        issues.push(QualityIssue {
            kind: IssueKind::Warning,
            message: "Many requirements appear to be vague or incomplete".to_string(),
            requirement_id: None,
            severity: Severity::Medium,
        });
    }

    issues
}

/// Derive improvement advice from metrics and the requirement set
pub fn generate_recommendations(
    metrics: &QualityMetrics,
    requirements: &[ProcessedRequirement],
) -> Vec<String> {
    let mut recommendations = Vec::new();
    let total = requirements.len();

    if metrics.quality_score < 0.6 {
        recommendations.push(
            "Consider reviewing and refining requirements to improve overall quality score"
                .to_string(),
        );
    }

    if metrics.pattern_distribution.len() < 3 && total > 10 {
        recommendations.push(
            "Consider using more diverse requirement patterns (UB, EV, UW, ST, OP) for comprehensive coverage"
                .to_string(),
        );
    }

    if metrics.average_confidence < 0.7 {
        recommendations.push(
            "Review requirements with low confidence scores and add more specific details"
                .to_string(),
        );
    }

    let categories: HashSet<Category> = requirements.iter().map(|r| r.category).collect();
    if categories.len() < 3 && total > 15 {
        recommendations.push(
            "Consider adding requirements across more functional domains for better coverage"
                .to_string(),
        );
    }

    let high_priority = requirements
        .iter()
        .filter(|r| r.priority == Priority::High)
        .count();
    if high_priority > 0 && high_priority as f64 / total as f64 > 0.5 {
        recommendations.push(
            "Consider reviewing priority assignments - too many high-priority requirements may indicate unclear prioritization"
                .to_string(),
        );
    }
    if high_priority == 0 {
        recommendations.push(
            "Consider identifying critical requirements and marking them as high priority"
                .to_string(),
        );
    }

    recommendations
}

fn dominant_pattern(requirements: &[ProcessedRequirement]) -> Option<(RequirementKind, usize)> {
    let mut dominant: Option<(RequirementKind, usize)> = None;
    for kind in RequirementKind::ALL {
        let count = requirements.iter().filter(|r| r.pattern == kind).count();
        if count > 0 && dominant.map_or(true, |(_, best)| count > best) {
            dominant = Some((kind, count));
        }
    }
    dominant
}
