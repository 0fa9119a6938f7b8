//! Match one requirement line against the six sentence templates

use mandate_domain::RequirementRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// Template precedence is load-bearing: "The X shall not Y" also satisfies
// the plain "The X shall Y" template, so the unwanted form is tried first.
// Captures are non-greedy up to the next keyword and taken verbatim.

static EVENT_DRIVEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^When\s+(.+?)\s+the\s+(.+?)\s+shall\s+(.+)$").unwrap()
});

static STATE_DRIVEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^While\s+(.+?)\s+the\s+(.+?)\s+shall\s+(.+)$").unwrap()
});

static OPTIONAL_IF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^If\s+(.+?)\s+then\s+the\s+(.+?)\s+shall\s+(.+)$").unwrap()
});

static OPTIONAL_WHERE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Where\s+(.+?)\s+the\s+(.+?)\s+shall\s+(.+)$").unwrap()
});

static UNWANTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^The\s+(.+?)\s+shall\s+not\s+(.+)$").unwrap());

static UBIQUITOUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^The\s+(.+?)\s+shall\s+(.+)$").unwrap());

/// Match a single trimmed, non-empty line against the requirement templates
///
/// Templates are tried in fixed precedence: event-driven, state-driven,
/// optional (if-then), optional (where), unwanted, ubiquitous. Keywords are
/// case-insensitive; captured fields keep their original casing. Returns
/// `None` when the line matches no template.
pub fn match_requirement(line: &str) -> Option<RequirementRecord> {
    if let Some(caps) = EVENT_DRIVEN.captures(line) {
        return Some(RequirementRecord::event_driven(&caps[1], &caps[2], &caps[3]));
    }
    if let Some(caps) = STATE_DRIVEN.captures(line) {
        return Some(RequirementRecord::state_driven(&caps[1], &caps[2], &caps[3]));
    }
    if let Some(caps) = OPTIONAL_IF.captures(line) {
        return Some(RequirementRecord::optional(&caps[1], &caps[2], &caps[3]));
    }
    if let Some(caps) = OPTIONAL_WHERE.captures(line) {
        return Some(RequirementRecord::optional(&caps[1], &caps[2], &caps[3]));
    }
    if let Some(caps) = UNWANTED.captures(line) {
        return Some(RequirementRecord::unwanted(&caps[1], &caps[2]));
    }
    if let Some(caps) = UBIQUITOUS.captures(line) {
        return Some(RequirementRecord::ubiquitous(&caps[1], &caps[2]));
    }
    None
}
