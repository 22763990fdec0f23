//! Safety filter applied to extraction candidates.

use tracing::debug;

use super::rules::{builtin_rules, SafetyRule};
use crate::error::{Error, Result};

/// Outcome of screening one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Candidate contains no denylisted fragment.
    Admitted,

    /// Candidate was rejected.
    Rejected {
        /// Name of the first rule that matched.
        rule_name: String,
    },
}

impl Verdict {
    /// Whether the candidate may be emitted.
    #[must_use]
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }
}

/// Denylist filter for extraction candidates.
///
/// The built-in rules are always active. Extra rules, usually from
/// configuration, can only reject more.
#[derive(Debug, Clone)]
pub struct SafetyFilter {
    rules: Vec<SafetyRule>,
}

impl SafetyFilter {
    /// Create a filter with only the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Create a filter with the built-in rules plus `extra_patterns`.
    ///
    /// Extra rules are named `custom_0`, `custom_1`, ... in the order given.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first pattern that fails to
    /// compile.
    pub fn with_extra_rules<S: AsRef<str>>(extra_patterns: &[S]) -> Result<Self> {
        let mut filter = Self::new();
        for (i, pattern) in extra_patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            let rule = SafetyRule::custom(format!("custom_{i}"), pattern).map_err(|e| {
                Error::config_validation(format!("invalid safety rule {pattern}: {e}"))
            })?;
            filter.rules.push(rule);
        }
        Ok(filter)
    }

    /// Screen a candidate against every rule in order.
    #[must_use]
    pub fn check(&self, candidate: &str) -> Verdict {
        match self.rules.iter().find(|rule| rule.matches(candidate)) {
            Some(rule) => {
                debug!(rule = %rule.name, "Candidate rejected by safety rule");
                Verdict::Rejected {
                    rule_name: rule.name.clone(),
                }
            }
            None => Verdict::Admitted,
        }
    }

    /// Whether the candidate passes every rule.
    #[must_use]
    pub fn is_safe(&self, candidate: &str) -> bool {
        self.check(candidate).is_admitted()
    }

    /// All active rules, built-in first.
    #[must_use]
    pub fn rules(&self) -> &[SafetyRule] {
        &self.rules
    }
}

impl Default for SafetyFilter {
    fn default() -> Self {
        Self::new()
    }
}
