//! Record module - the typed decomposition of one requirement line

use crate::kind::RequirementKind;
use serde::{Deserialize, Serialize};

/// Position of a requirement within its source document
///
/// Lines and columns are 1-based. Records produced line-at-a-time always
/// carry column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
}

impl SourceLocation {
    /// Location at the start of the given 1-based line
    pub fn line(line: usize) -> Self {
        Self { line, column: 1 }
    }
}

/// A parsed requirement - one line decomposed into typed fields
///
/// Exactly one of `precondition`, `state`, `condition` is set for the
/// kinds that carry a trigger (event-driven, state-driven, optional);
/// none are set for ubiquitous and unwanted records. `negated` is true
/// only for unwanted behavior. The constructors uphold these rules;
/// records arriving from outside (deserialized from editor traffic) may
/// violate them and are checked by the gatekeeper instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    /// Which sentence template the line matched
    pub kind: RequirementKind,

    /// The acting entity ("parser", "system", ...)
    pub entity: String,

    /// The required behavior, verbatim from the line
    pub functionality: String,

    /// Event trigger for event-driven requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precondition: Option<String>,

    /// Active state for state-driven requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Gating condition for optional requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// True when the behavior is prohibited rather than required
    #[serde(default)]
    pub negated: bool,

    /// Where in the source document the line was found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl RequirementRecord {
    /// Plain requirement: `The <entity> shall <functionality>`
    pub fn ubiquitous(entity: impl Into<String>, functionality: impl Into<String>) -> Self {
        Self {
            kind: RequirementKind::Ubiquitous,
            entity: entity.into(),
            functionality: functionality.into(),
            precondition: None,
            state: None,
            condition: None,
            negated: false,
            location: None,
        }
    }

    /// Event-driven requirement: `When <precondition> the <entity> shall <functionality>`
    pub fn event_driven(
        precondition: impl Into<String>,
        entity: impl Into<String>,
        functionality: impl Into<String>,
    ) -> Self {
        Self {
            kind: RequirementKind::EventDriven,
            entity: entity.into(),
            functionality: functionality.into(),
            precondition: Some(precondition.into()),
            state: None,
            condition: None,
            negated: false,
            location: None,
        }
    }

    /// State-driven requirement: `While <state> the <entity> shall <functionality>`
    pub fn state_driven(
        state: impl Into<String>,
        entity: impl Into<String>,
        functionality: impl Into<String>,
    ) -> Self {
        Self {
            kind: RequirementKind::StateDriven,
            entity: entity.into(),
            functionality: functionality.into(),
            precondition: None,
            state: Some(state.into()),
            condition: None,
            negated: false,
            location: None,
        }
    }

    /// Optional requirement: `If <condition> then ...` or `Where <condition> ...`
    pub fn optional(
        condition: impl Into<String>,
        entity: impl Into<String>,
        functionality: impl Into<String>,
    ) -> Self {
        Self {
            kind: RequirementKind::Optional,
            entity: entity.into(),
            functionality: functionality.into(),
            precondition: None,
            state: None,
            condition: Some(condition.into()),
            negated: false,
            location: None,
        }
    }

    /// Unwanted behavior: `The <entity> shall not <functionality>`
    pub fn unwanted(entity: impl Into<String>, functionality: impl Into<String>) -> Self {
        Self {
            kind: RequirementKind::Unwanted,
            entity: entity.into(),
            functionality: functionality.into(),
            precondition: None,
            state: None,
            condition: None,
            negated: true,
            location: None,
        }
    }

    /// Attach a source location, consuming and returning the record
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// The trigger clause, if any
    ///
    /// Checked in precondition, condition, state order; at most one is set
    /// on well-formed records so the order only matters for malformed ones.
    pub fn trigger(&self) -> Option<&str> {
        self.precondition
            .as_deref()
            .or(self.condition.as_deref())
            .or(self.state.as_deref())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: trigger-bearing constructors store the clause verbatim
        #[test]
        fn test_trigger_preserved(clause in "[a-zA-Z ]{1,40}") {
            let ev = RequirementRecord::event_driven(clause.clone(), "system", "respond");
            prop_assert_eq!(ev.trigger(), Some(clause.as_str()));

            let st = RequirementRecord::state_driven(clause.clone(), "system", "respond");
            prop_assert_eq!(st.trigger(), Some(clause.as_str()));

            let op = RequirementRecord::optional(clause.clone(), "system", "respond");
            prop_assert_eq!(op.trigger(), Some(clause.as_str()));
        }

        /// Property: constructors never set more than one trigger field
        #[test]
        fn test_at_most_one_trigger(entity in "[a-z]{1,10}", func in "[a-z ]{1,30}") {
            for record in [
                RequirementRecord::ubiquitous(entity.clone(), func.clone()),
                RequirementRecord::event_driven("p", entity.clone(), func.clone()),
                RequirementRecord::state_driven("s", entity.clone(), func.clone()),
                RequirementRecord::optional("c", entity.clone(), func.clone()),
                RequirementRecord::unwanted(entity.clone(), func.clone()),
            ] {
                let set = [
                    record.precondition.is_some(),
                    record.state.is_some(),
                    record.condition.is_some(),
                ];
                prop_assert!(set.iter().filter(|present| **present).count() <= 1);
                prop_assert_eq!(record.kind.has_trigger(), record.trigger().is_some());
            }
        }

        /// Property: serde round-trip preserves the record
        #[test]
        fn test_serde_roundtrip(entity in "[a-z]{1,10}", func in "[a-z ]{1,30}") {
            let record = RequirementRecord::unwanted(entity, func).at(SourceLocation::line(3));
            let json = serde_json::to_string(&record).unwrap();
            let back: RequirementRecord = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(record, back);
        }
    }
}
