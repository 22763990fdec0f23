//! Injection screening for extraction candidates.
//!
//! Email, URL and phone candidates are checked against a denylist before they
//! are emitted. The denylist rejects, case-insensitively:
//!
//! - **Markup injection**: `<script` and `</script>` tags.
//! - **SQL injection**: `DROP TABLE` and `SELECT ... FROM` fragments.
//!
//! # Example
//!
//! ```
//! use textsieve::safety::{SafetyFilter, Verdict};
//!
//! let filter = SafetyFilter::new();
//!
//! assert!(filter.is_safe("https://example.com"));
//! match filter.check("1; DROP TABLE users") {
//!     Verdict::Admitted => println!("Candidate is safe"),
//!     Verdict::Rejected { rule_name } => println!("Rejected by: {rule_name}"),
//! }
//! ```

mod filter;
mod rules;

use std::sync::LazyLock;

pub use filter::{SafetyFilter, Verdict};
pub use rules::{builtin_rules, SafetyRule};

static BUILTIN: LazyLock<SafetyFilter> = LazyLock::new(SafetyFilter::new);

/// Check a candidate against the built-in denylist.
#[must_use]
pub fn is_safe(candidate: &str) -> bool {
    BUILTIN.is_safe(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_safe_uses_builtin_rules() {
        assert!(is_safe("#weekend"));
        assert!(!is_safe("<script>alert(1)</script>"));
        assert!(!is_safe("select * from accounts"));
    }
}
