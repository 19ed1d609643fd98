//! Regex-based word extraction for dictionary training.

use regex::Regex;

use crate::error::{OrthosError, Result};

/// The pattern matched by the default tokenizer: maximal runs of lowercase
/// ASCII letters. Everything else — digits, punctuation, whitespace, and
/// uppercase letters — acts as a separator.
pub const WORD_PATTERN: &str = "[a-z]+";

/// A regex-based tokenizer that extracts training words from raw corpus text.
///
/// Tokens are returned in left-to-right order with duplicates preserved,
/// since frequency counting needs the repeats. No case folding is applied;
/// uppercase characters simply never appear in a token.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract words
    pattern: Regex,
}

impl WordTokenizer {
    /// Create a new tokenizer with the default lowercase-run pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a new tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| OrthosError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer { pattern: regex })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Extract all word tokens from `text`, in order, duplicates preserved.
    ///
    /// Empty input yields an empty sequence; there are no error conditions.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(text).map(|mat| mat.as_str()).collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}
