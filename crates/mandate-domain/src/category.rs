//! Category module - functional domains for classified requirements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional domain a requirement belongs to
///
/// The categorizer assigns one of {System, UserInterface, Security, Data,
/// Business} from entity and functionality text; the remaining variants
/// exist as filter and coverage domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Core system behavior
    System,
    /// User-facing interaction and presentation
    UserInterface,
    /// Authentication, authorization, and protection
    Security,
    /// Timing, throughput, and resource constraints
    Performance,
    /// Storage, retrieval, and data integrity
    Data,
    /// Interfaces to external systems
    Integration,
    /// Business rules and processes
    Business,
    /// Technical and implementation constraints
    Technical,
}

impl Category {
    /// All supported domains, in canonical order
    pub const ALL: [Category; 8] = [
        Category::System,
        Category::UserInterface,
        Category::Security,
        Category::Performance,
        Category::Data,
        Category::Integration,
        Category::Business,
        Category::Technical,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::System => "system",
            Category::UserInterface => "user-interface",
            Category::Security => "security",
            Category::Performance => "performance",
            Category::Data => "data",
            Category::Integration => "integration",
            Category::Business => "business",
            Category::Technical => "technical",
        }
    }

    /// Parse a category from its kebab-case name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "system" => Some(Category::System),
            "user-interface" => Some(Category::UserInterface),
            "security" => Some(Category::Security),
            "performance" => Some(Category::Performance),
            "data" => Some(Category::Data),
            "integration" => Some(Category::Integration),
            "business" => Some(Category::Business),
            "technical" => Some(Category::Technical),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}
