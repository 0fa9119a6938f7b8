//! Gatekeeper configuration

/// Configuration for validation rules
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Warn when functionality uses "should" or "could"
    pub check_weak_language: bool,

    /// Warn when functionality has very few words
    pub check_brevity: bool,

    /// Warn when functionality contains known ambiguous terms
    pub check_ambiguous_terms: bool,

    /// Entities shorter than this draw a warning (characters)
    pub min_entity_length: usize,

    /// Functionality shorter than this draws a warning (characters)
    pub min_functionality_length: usize,

    /// Functionality with fewer words than this draws a brevity warning
    pub min_word_count: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_weak_language: true,
            check_brevity: true,
            check_ambiguous_terms: true,
            min_entity_length: 3,
            min_functionality_length: 10,
            min_word_count: 3,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural checks only)
    pub fn permissive() -> Self {
        Self {
            check_weak_language: false,
            check_brevity: false,
            check_ambiguous_terms: false,
            min_entity_length: 1,
            min_functionality_length: 1,
            min_word_count: 1,
        }
    }

    /// Create a strict configuration (all checks, tighter thresholds)
    pub fn strict() -> Self {
        Self {
            check_weak_language: true,
            check_brevity: true,
            check_ambiguous_terms: true,
            min_entity_length: 3,
            min_functionality_length: 15,
            min_word_count: 4,
        }
    }
}
