//! Email pattern matching
//!
//! A single fixed regular expression, applied to the whole document. Matches
//! are not validated any further.

use regex::Regex;

/// Email address pattern, bounded by word boundaries on both ends
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Compiled email matcher
#[derive(Debug, Clone)]
pub struct EmailPattern {
    regex: Regex,
}

impl EmailPattern {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"),
        }
    }

    /// All raw matches, left to right, non-overlapping, duplicates kept
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Check that `candidate` in its entirety is one email match
    pub fn is_email(&self, candidate: &str) -> bool {
        self.regex
            .find(candidate)
            .is_some_and(|m| m.start() == 0 && m.end() == candidate.len())
    }
}

impl Default for EmailPattern {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything after the first `@`, verbatim
#[inline]
pub fn domain_of(email: &str) -> &str {
    match email.split_once('@') {
        Some((_, domain)) => domain,
        None => "",
    }
}
