//! The combined extraction record and its JSON form.

use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::Result;

/// Default JSON indent width, matching existing snapshot fixtures.
pub const DEFAULT_INDENT: usize = 4;

/// Everything extracted from one input text.
///
/// Each field lists values in the order they were found. Emails and credit
/// cards are stored masked; raw values for those categories never appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Masked email addresses.
    pub emails: Vec<String>,
    /// Secure (`https://`) URLs.
    pub urls: Vec<String>,
    /// Phone numbers, verbatim.
    pub phones: Vec<String>,
    /// Masked credit card numbers.
    pub credit_cards: Vec<String>,
    /// Time-of-day expressions, verbatim.
    pub times: Vec<String>,
    /// Hashtags including the leading `#`.
    pub hashtags: Vec<String>,
}

impl ExtractionResult {
    /// Values extracted for one category.
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Email => &self.emails,
            Category::Url => &self.urls,
            Category::Phone => &self.phones,
            Category::CreditCard => &self.credit_cards,
            Category::Time => &self.times,
            Category::Hashtag => &self.hashtags,
        }
    }

    pub(crate) fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Email => &mut self.emails,
            Category::Url => &mut self.urls,
            Category::Phone => &mut self.phones,
            Category::CreditCard => &mut self.credit_cards,
            Category::Time => &mut self.times,
            Category::Hashtag => &mut self.hashtags,
        }
    }

    /// Total number of values across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// Whether nothing at all was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render as JSON, indenting nested values by `indent` spaces.
    ///
    /// An indent of 0 produces compact single-line output. There is no
    /// trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, indent: usize) -> Result<String> {
        if indent == 0 {
            return Ok(serde_json::to_string(self)?);
        }

        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
