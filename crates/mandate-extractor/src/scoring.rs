//! Priority and confidence scoring for parsed requirements

use mandate_domain::{Priority, RequirementKind, RequirementRecord};

/// Map a requirement kind to a priority level
///
/// Prohibited behavior demands the most attention, event-driven behavior
/// sits in the middle, and everything else defaults to low. Deliberately
/// coarse; the functionality text is not consulted.
pub fn priority_for(kind: RequirementKind) -> Priority {
    match kind {
        RequirementKind::Unwanted => Priority::High,
        RequirementKind::EventDriven => Priority::Medium,
        _ => Priority::Low,
    }
}

/// Completeness-based confidence for a parsed record, in [0, 1]
///
/// Base 0.5; +0.3 when both entity and functionality are non-empty; +0.2
/// when a trigger clause is present. Monotone: added detail never lowers
/// the score.
pub fn confidence_for(record: &RequirementRecord) -> f64 {
    let mut confidence: f64 = 0.5;

    if !record.entity.is_empty() && !record.functionality.is_empty() {
        confidence += 0.3;
    }

    if record.trigger().is_some() {
        confidence += 0.2;
    }

    confidence.min(1.0)
}
