//! Rule names, finding codes, and validation

use colored::Colorize;

/// Raised by the scanner for a subtree it could not walk
pub const RULE_SCAN_SUBTREE: &str = "SCAN001";
/// Raised by the scanner for a file it could not read in time
pub const RULE_SCAN_READ: &str = "SCAN002";
/// Entry-point file performs a top-level `require`
pub const RULE_EAGER_REQUIRE: &str = "LAZY001";
/// Key mapping hard-codes a literal `<leader>` sequence
pub const RULE_LEADER_MAPPING: &str = "KEY001";
/// No health-check module anywhere in the tree
pub const RULE_MISSING_HEALTH: &str = "HEALTH001";
/// Malformed help tag declaration
pub const RULE_HELP_TAG_FORMAT: &str = "HELP001";
/// Help link does not resolve to any declared tag
pub const RULE_HELP_UNRESOLVED_LINK: &str = "HELP002";

/// Valid rule names for the --only and --skip options
pub const VALID_RULES: &[&str] = &["lazy", "keymaps", "health", "helpdoc"];

/// Check if a rule name is valid
pub fn is_valid_rule(name: &str) -> bool {
    VALID_RULES.contains(&name)
}

/// Filter a list of rule names, returning only valid ones and printing
/// warnings for invalid ones
pub fn filter_valid_rules(rules: Vec<String>) -> Vec<String> {
    let mut valid = Vec::new();
    for rule in rules {
        if is_valid_rule(&rule) {
            valid.push(rule);
        } else {
            eprintln!(
                "{} Unknown rule '{}' ignored. Valid rules: {}",
                "Warning:".yellow(),
                rule.cyan(),
                VALID_RULES.join(", ").dimmed()
            );
        }
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rules_list() {
        assert_eq!(VALID_RULES.len(), 4);
        assert!(VALID_RULES.contains(&"lazy"));
        assert!(VALID_RULES.contains(&"keymaps"));
        assert!(VALID_RULES.contains(&"health"));
        assert!(VALID_RULES.contains(&"helpdoc"));
    }

    #[test]
    fn test_is_valid_rule() {
        assert!(is_valid_rule("lazy"));
        assert!(!is_valid_rule("secrets"));
        assert!(!is_valid_rule(""));
    }

    #[test]
    fn test_filter_valid_rules_drops_unknown() {
        let filtered = filter_valid_rules(vec![
            "lazy".to_string(),
            "bogus".to_string(),
            "helpdoc".to_string(),
        ]);
        assert_eq!(filtered, vec!["lazy".to_string(), "helpdoc".to_string()]);
    }
}
