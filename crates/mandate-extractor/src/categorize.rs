//! Assign functional categories from entity and functionality text

use mandate_domain::Category;

const SECURITY_KEYWORDS: [&str; 3] = ["authenticate", "login", "security"];
const DATA_KEYWORDS: [&str; 3] = ["store", "data", "save"];
const INTERFACE_KEYWORDS: [&str; 3] = ["interface", "display", "show"];

/// Categorize a requirement from its entity and functionality text
///
/// A static decision table over lower-cased substrings: system-like
/// entities are refined by functionality keywords, user-facing entities
/// map to the interface category, and everything else is treated as a
/// business rule. Keyword order matters; the first matching bucket wins.
pub fn categorize(entity: &str, functionality: &str) -> Category {
    let entity = entity.to_lowercase();
    let functionality = functionality.to_lowercase();

    if entity.contains("system") || entity.contains("application") {
        if contains_any(&functionality, &SECURITY_KEYWORDS) {
            return Category::Security;
        }
        if contains_any(&functionality, &DATA_KEYWORDS) {
            return Category::Data;
        }
        if contains_any(&functionality, &INTERFACE_KEYWORDS) {
            return Category::UserInterface;
        }
        return Category::System;
    }

    if entity.contains("user") {
        return Category::UserInterface;
    }

    Category::Business
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_entity_with_security_keywords() {
        assert_eq!(
            categorize("system", "authenticate incoming sessions"),
            Category::Security
        );
        assert_eq!(categorize("application", "handle login flows"), Category::Security);
        assert_eq!(categorize("system", "enforce security policy"), Category::Security);
    }

    #[test]
    fn test_system_entity_with_data_keywords() {
        assert_eq!(categorize("system", "store audit records"), Category::Data);
        assert_eq!(categorize("application", "save drafts"), Category::Data);
        assert_eq!(categorize("system", "index data nightly"), Category::Data);
    }

    #[test]
    fn test_system_entity_with_interface_keywords() {
        assert_eq!(categorize("system", "display progress"), Category::UserInterface);
        assert_eq!(categorize("system", "show a summary"), Category::UserInterface);
        assert_eq!(
            categorize("application", "refresh the interface"),
            Category::UserInterface
        );
    }

    #[test]
    fn test_system_entity_default() {
        assert_eq!(categorize("system", "restart workers"), Category::System);
        assert_eq!(categorize("application", "rotate queues"), Category::System);
    }

    #[test]
    fn test_security_outranks_data_keywords() {
        // "login" and "store" both present; security is checked first
        assert_eq!(
            categorize("system", "store login attempts"),
            Category::Security
        );
    }

    #[test]
    fn test_user_entity() {
        assert_eq!(categorize("user", "reset a password"), Category::UserInterface);
        assert_eq!(categorize("user portal", "render dashboards"), Category::UserInterface);
    }

    #[test]
    fn test_other_entities_are_business() {
        assert_eq!(categorize("parser", "tokenize aears files"), Category::Business);
        // Security keywords do not help a non-system entity
        assert_eq!(categorize("gateway", "authenticate peers"), Category::Business);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(categorize("SYSTEM", "STORE RECORDS"), Category::Data);
        assert_eq!(categorize("The User", "click"), Category::UserInterface);
    }
}
