//! Extraction of sensitive and structured substrings from free text.
//!
//! Six categories are extracted independently, each by its own pattern:
//!
//! - **Emails**: screened by the safety filter, then masked.
//! - **URLs**: screened by the safety filter; insecure `http://` links dropped.
//! - **Phones**: screened by the safety filter.
//! - **Credit cards**: masked to the last four digits.
//! - **Times** and **hashtags**: reported verbatim.
//!
//! A substring that fits two categories shows up in both.
//!
//! # Example
//!
//! ```
//! use textsieve::extract::extract;
//!
//! let result = extract("Mail joe@test.com, card 1234-5678-9012-3456 #security");
//!
//! assert_eq!(result.emails, ["j*e@test.com"]);
//! assert_eq!(result.credit_cards, ["**** **** **** 3456"]);
//! assert_eq!(result.hashtags, ["#security"]);
//! ```

mod patterns;
mod result;

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use patterns::{match_all, matcher, Candidate, Matcher};
pub use result::{ExtractionResult, DEFAULT_INDENT};

use crate::error::Result;
use crate::mask::{mask_credit_card, mask_email};
use crate::safety::SafetyFilter;

/// URL scheme that is never reported.
const INSECURE_SCHEME: &str = "http://";

/// A category of extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Email addresses.
    Email,
    /// `http://` and `https://` links.
    Url,
    /// Phone numbers.
    Phone,
    /// 16-digit card numbers.
    CreditCard,
    /// Time-of-day expressions.
    Time,
    /// `#tags`.
    Hashtag,
}

impl Category {
    /// Every category, in processing order.
    pub const ALL: [Category; 6] = [
        Self::Email,
        Self::Url,
        Self::Phone,
        Self::CreditCard,
        Self::Time,
        Self::Hashtag,
    ];

    /// Name of the matching [`ExtractionResult`] field.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Email => "emails",
            Self::Url => "urls",
            Self::Phone => "phones",
            Self::CreditCard => "credit_cards",
            Self::Time => "times",
            Self::Hashtag => "hashtags",
        }
    }

    /// Whether candidates of this category go through the safety filter.
    ///
    /// Cards, times and hashtags are never screened.
    #[must_use]
    pub fn is_screened(self) -> bool {
        matches!(self, Self::Email | Self::Url | Self::Phone)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Url => write!(f, "url"),
            Self::Phone => write!(f, "phone"),
            Self::CreditCard => write!(f, "credit_card"),
            Self::Time => write!(f, "time"),
            Self::Hashtag => write!(f, "hashtag"),
        }
    }
}

/// Runs every category's matcher and applies screening and masking.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    filter: SafetyFilter,
}

impl Extractor {
    /// Create an extractor using the built-in safety rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a custom safety filter.
    #[must_use]
    pub fn with_filter(filter: SafetyFilter) -> Self {
        Self { filter }
    }

    /// The safety filter used for screened categories.
    #[must_use]
    pub fn filter(&self) -> &SafetyFilter {
        &self.filter
    }

    /// Extract every category from `text`.
    ///
    /// # Panics
    ///
    /// Panics if a matcher produces a candidate its masker cannot handle. The
    /// patterns make that impossible, so a panic here is a bug.
    #[must_use]
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        for category in Category::ALL {
            *result.get_mut(category) = self.extract_category(category, text);
        }
        debug!(values = result.len(), bytes = text.len(), "Extraction finished");
        result
    }

    /// Extract a single category from `text`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Extractor::extract`].
    #[must_use]
    pub fn extract_category(&self, category: Category, text: &str) -> Vec<String> {
        let values: Vec<String> = matcher(category)
            .find_all(text)
            .filter(|candidate| self.admit(candidate))
            .map(|candidate| {
                process(candidate).unwrap_or_else(|e| panic!("matcher/masker mismatch: {e}"))
            })
            .collect();
        trace!(%category, count = values.len(), "Category extracted");
        values
    }

    fn admit(&self, candidate: &Candidate<'_>) -> bool {
        if candidate.category.is_screened() && !self.filter.is_safe(candidate.value) {
            return false;
        }
        if candidate.category == Category::Url && candidate.value.starts_with(INSECURE_SCHEME) {
            debug!(start = candidate.start, "Insecure URL dropped");
            return false;
        }
        true
    }
}

/// Turn an admitted candidate into its reported form.
fn process(candidate: Candidate<'_>) -> Result<String> {
    match candidate.category {
        Category::Email => mask_email(candidate.value),
        Category::CreditCard => mask_credit_card(candidate.value),
        Category::Url | Category::Phone | Category::Time | Category::Hashtag => {
            Ok(candidate.value.to_string())
        }
    }
}

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::new);

/// Extract every category from `text` with the built-in safety rules.
///
/// # Panics
///
/// Panics under the same conditions as [`Extractor::extract`].
#[must_use]
pub fn extract(text: &str) -> ExtractionResult {
    DEFAULT_EXTRACTOR.extract(text)
}
