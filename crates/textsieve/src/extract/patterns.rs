//! Built-in extraction patterns.
//!
//! One compiled [`Matcher`] per [`Category`]. Matchers are built lazily on
//! first use and shared for the life of the process; they hold no mutable
//! state, so any number of threads may scan with them at once.

use std::sync::LazyLock;

use regex::Regex;

use super::Category;

/// A substring of the input matched by a category's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Category whose pattern produced this match.
    pub category: Category,

    /// The matched text, borrowed from the input.
    pub value: &'a str,

    /// Byte offset of the first character in the input.
    pub start: usize,
}

impl Candidate<'_> {
    /// Byte offset one past the last character in the input.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.value.len()
    }
}

/// A compiled extraction pattern for one category.
#[derive(Debug)]
pub struct Matcher {
    /// Category this matcher extracts.
    pub category: Category,

    /// Description of what this pattern matches.
    pub description: &'static str,

    /// The compiled regex.
    regex: Regex,

    /// Characters stripped from the end of every match.
    trim_end: &'static [char],
}

impl Matcher {
    /// Create a new matcher.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(category: Category, description: &'static str, pattern: &str) -> Self {
        Self {
            category,
            description,
            regex: Regex::new(pattern).expect("Invalid regex pattern"),
            trim_end: &[],
        }
    }

    /// Strip any run of `chars` from the end of each match.
    ///
    /// A trimmed match is only reported if it still satisfies the pattern on
    /// its own.
    #[must_use]
    pub fn trimming(mut self, chars: &'static [char]) -> Self {
        self.trim_end = chars;
        self
    }

    /// Check if the content contains a match for this pattern.
    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        self.find_all(content).next().is_some()
    }

    /// Find all matches in the content, left to right.
    pub fn find_all<'a>(&'a self, content: &'a str) -> impl Iterator<Item = Candidate<'a>> + 'a {
        self.regex.find_iter(content).filter_map(move |m| {
            let value = m.as_str().trim_end_matches(self.trim_end);
            if value.len() != m.len() && !self.is_whole_match(value) {
                return None;
            }
            Some(Candidate {
                category: self.category,
                value,
                start: m.start(),
            })
        })
    }

    fn is_whole_match(&self, value: &str) -> bool {
        self.regex
            .find(value)
            .is_some_and(|m| m.start() == 0 && m.end() == value.len())
    }
}

static EMAIL: LazyLock<Matcher> = LazyLock::new(|| {
    Matcher::new(
        Category::Email,
        "local@domain addresses with a 2+ letter top-level label",
        r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b",
    )
});

static URL: LazyLock<Matcher> = LazyLock::new(|| {
    Matcher::new(
        Category::Url,
        "http:// and https:// links up to whitespace, angle brackets or quotes",
        r#"\bhttps?://[^\s<>"]+"#,
    )
    .trimming(&['.', ','])
});

static PHONE: LazyLock<Matcher> = LazyLock::new(|| {
    Matcher::new(
        Category::Phone,
        "3-3-4 digit phone numbers with optional country code",
        r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
    )
});

static CREDIT_CARD: LazyLock<Matcher> = LazyLock::new(|| {
    Matcher::new(
        Category::CreditCard,
        "Four groups of four digits joined by one consistent separator",
        r"\b(?:\d{4}-\d{4}-\d{4}-\d{4}|\d{4} \d{4} \d{4} \d{4}|\d{16})\b",
    )
});

static TIME: LazyLock<Matcher> = LazyLock::new(|| {
    Matcher::new(
        Category::Time,
        "H:MM / HH:MM with optional AM/PM, or HHMM hrs",
        r"\b(?:(?:[01]?\d|2[0-3]):[0-5]\d(?:\s?[APap][Mm])?|(?:[01]\d|2[0-3])[0-5]\d\s?hrs)\b",
    )
});

static HASHTAG: LazyLock<Matcher> =
    LazyLock::new(|| Matcher::new(Category::Hashtag, "# followed by word characters", r"#\w+"));

/// Get the built-in matcher for a category.
#[must_use]
pub fn matcher(category: Category) -> &'static Matcher {
    match category {
        Category::Email => &*EMAIL,
        Category::Url => &*URL,
        Category::Phone => &*PHONE,
        Category::CreditCard => &*CREDIT_CARD,
        Category::Time => &*TIME,
        Category::Hashtag => &*HASHTAG,
    }
}

/// Run a category's matcher over `text`, yielding raw matched substrings.
///
/// Matches come back in order of position; duplicates are kept.
pub fn match_all(category: Category, text: &str) -> impl Iterator<Item = &str> {
    matcher(category).find_all(text).map(|c| c.value)
}
