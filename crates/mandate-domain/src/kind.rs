//! Kind module - the six requirement sentence templates

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sentence template a requirement line matched
///
/// Requirements follow one of six constrained templates:
/// - Ubiquitous: `The <entity> shall <functionality>`
/// - EventDriven: `When <precondition> the <entity> shall <functionality>`
/// - StateDriven: `While <state> the <entity> shall <functionality>`
/// - Optional: `If <condition> then the <entity> shall <functionality>`
///   (also the `Where <condition> ...` form)
/// - Unwanted: `The <entity> shall not <functionality>`
/// - Hybrid: reserved for compound conditional statements; no matcher
///   produces it today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementKind {
    /// Unconditional behavior, always active
    #[serde(rename = "UB")]
    Ubiquitous,

    /// Behavior triggered by a discrete event
    #[serde(rename = "EV")]
    EventDriven,

    /// Behavior prohibited by the requirement
    #[serde(rename = "UW")]
    Unwanted,

    /// Behavior active while a state holds
    #[serde(rename = "ST")]
    StateDriven,

    /// Behavior gated on an optional feature or condition
    #[serde(rename = "OP")]
    Optional,

    /// Compound conditional behavior (reserved, never constructed)
    #[serde(rename = "HY")]
    Hybrid,
}

impl RequirementKind {
    /// All kinds in display and statistics order
    pub const ALL: [RequirementKind; 6] = [
        RequirementKind::Ubiquitous,
        RequirementKind::EventDriven,
        RequirementKind::Unwanted,
        RequirementKind::StateDriven,
        RequirementKind::Optional,
        RequirementKind::Hybrid,
    ];

    /// Get the two-letter kind code
    pub fn code(&self) -> &'static str {
        match self {
            RequirementKind::Ubiquitous => "UB",
            RequirementKind::EventDriven => "EV",
            RequirementKind::Unwanted => "UW",
            RequirementKind::StateDriven => "ST",
            RequirementKind::Optional => "OP",
            RequirementKind::Hybrid => "HY",
        }
    }

    /// Get a human-readable name for the kind
    pub fn label(&self) -> &'static str {
        match self {
            RequirementKind::Ubiquitous => "Ubiquitous",
            RequirementKind::EventDriven => "Event-driven",
            RequirementKind::Unwanted => "Unwanted",
            RequirementKind::StateDriven => "State-driven",
            RequirementKind::Optional => "Optional",
            RequirementKind::Hybrid => "Hybrid",
        }
    }

    /// Parse a kind from its two-letter code
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "UB" => Some(RequirementKind::Ubiquitous),
            "EV" => Some(RequirementKind::EventDriven),
            "UW" => Some(RequirementKind::Unwanted),
            "ST" => Some(RequirementKind::StateDriven),
            "OP" => Some(RequirementKind::Optional),
            "HY" => Some(RequirementKind::Hybrid),
            _ => None,
        }
    }

    /// Whether a kind carries a trigger clause (precondition, state, or condition)
    pub fn has_trigger(&self) -> bool {
        matches!(
            self,
            RequirementKind::EventDriven | RequirementKind::StateDriven | RequirementKind::Optional
        )
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for RequirementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid requirement kind: {}", s))
    }
}
