//! Built-in safety denylist.
//!
//! Each rule names a fragment that marks a candidate as a likely injection
//! attempt. Rules are plain data; adding one means adding a row to
//! [`builtin_rules`].

use regex::Regex;

/// A compiled denylist rule.
#[derive(Debug, Clone)]
pub struct SafetyRule {
    /// Name of the rule for identification.
    pub name: String,

    /// Description of what this rule rejects.
    pub description: String,

    /// The compiled regex.
    regex: Regex,
}

impl SafetyRule {
    /// Create a new rule from a trusted pattern.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(name: &str, description: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            regex: Regex::new(pattern).expect("Invalid regex pattern"),
        }
    }

    /// Create a rule from a user-supplied pattern.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the pattern does not compile.
    pub fn custom(name: String, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            description: format!("Custom pattern {pattern}"),
            name,
            regex: Regex::new(pattern)?,
        })
    }

    /// Check if the candidate contains this rule's pattern.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The source pattern of this rule.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Get all built-in safety rules.
#[must_use]
pub fn builtin_rules() -> Vec<SafetyRule> {
    vec![
        // Markup injection
        SafetyRule::new("script_open", "Opening <script tag", r"(?i)<script"),
        SafetyRule::new("script_close", "Closing </script> tag", r"(?i)</script>"),
        // SQL injection
        SafetyRule::new(
            "sql_drop_table",
            "DROP TABLE statements",
            r"(?i)drop\s+table",
        ),
        SafetyRule::new(
            "sql_select_from",
            "SELECT ... FROM queries",
            r"(?i)select\s+.*\s+from",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> SafetyRule {
        builtin_rules()
            .into_iter()
            .find(|r| r.name == name)
            .unwrap()
    }

    #[test]
    fn test_builtin_rules_have_names() {
        let rules = builtin_rules();
        assert_eq!(rules.len(), 4);
        for rule in rules {
            assert!(!rule.name.is_empty());
            assert!(!rule.description.is_empty());
        }
    }

    #[test]
    fn test_script_rules_case_insensitive() {
        assert!(rule("script_open").matches("<SCRIPT src=x>"));
        assert!(rule("script_open").matches("a<ScRiPt"));
        assert!(rule("script_close").matches("x</Script>"));
        assert!(!rule("script_close").matches("</script"));
    }

    #[test]
    fn test_drop_table_whitespace_flexible() {
        let drop = rule("sql_drop_table");
        assert!(drop.matches("DROP TABLE users"));
        assert!(drop.matches("drop\t\n  table"));
        assert!(!drop.matches("droptable"));
    }

    #[test]
    fn test_select_from_spans_anything() {
        let select = rule("sql_select_from");
        assert!(select.matches("SELECT * FROM users"));
        assert!(select.matches("select name, id  from t"));
        assert!(!select.matches("selectfrom"));
        assert!(!select.matches("select from"));
    }

    #[test]
    fn test_custom_rule() {
        let custom = SafetyRule::custom("custom_0".to_string(), r"(?i)union\s+all").unwrap();
        assert!(custom.matches("UNION ALL"));
        assert_eq!(custom.pattern(), r"(?i)union\s+all");
        assert!(custom.description.contains("union"));
    }

    #[test]
    fn test_custom_rule_invalid() {
        assert!(SafetyRule::custom("bad".to_string(), "[invalid").is_err());
    }
}
