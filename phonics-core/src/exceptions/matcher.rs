//! Word matchers for exception entries

use regex::{Regex, RegexBuilder};

/// Matches a whole word, either literally or by regular expression
///
/// Both kinds are case-insensitive.
#[derive(Debug, Clone)]
pub enum WordMatcher {
    /// Exact word
    Exact(String),
    /// Regular expression tested against the word
    Pattern(Regex),
}

impl WordMatcher {
    /// Exact matcher
    pub fn exact(word: impl Into<String>) -> Self {
        WordMatcher::Exact(word.into().to_lowercase())
    }

    /// Compile a case-insensitive regex matcher
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map(WordMatcher::Pattern)
    }

    /// Check the word against this matcher
    pub fn matches(&self, word: &str) -> bool {
        match self {
            WordMatcher::Exact(expected) => expected.eq_ignore_ascii_case(word),
            WordMatcher::Pattern(regex) => regex.is_match(word),
        }
    }
}

impl PartialEq for WordMatcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (WordMatcher::Exact(a), WordMatcher::Exact(b)) => a == b,
            (WordMatcher::Pattern(a), WordMatcher::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}
