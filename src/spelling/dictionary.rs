//! Frequency dictionary built from a training corpus.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::analysis::tokenizer::WordTokenizer;
use crate::error::Result;

/// A dictionary mapping each word observed during training to its number of
/// occurrences in the corpus.
///
/// The dictionary is built exactly once and is read-only afterwards: every
/// trained word has a count of at least 1, and absence of an entry means
/// "unknown word". Lookups are exact — a query is never lowercased or
/// trimmed, so `"The"` and `"the"` are different keys (only the latter can
/// ever be trained, since the tokenizer treats uppercase as a separator).
#[derive(Debug, Clone, Default)]
pub struct FrequencyDictionary {
    /// Words and their occurrence counts
    words: HashMap<String, u32>,
    /// Total number of tokens consumed during training
    total_tokens: u64,
}

impl FrequencyDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        FrequencyDictionary {
            words: HashMap::new(),
            total_tokens: 0,
        }
    }

    /// Train a dictionary from a sequence of word tokens.
    ///
    /// Each token increments its word's count, starting at 1 on first
    /// sight. The result depends only on the multiset of tokens, not their
    /// order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = FrequencyDictionary::new();
        for token in tokens {
            let word = token.as_ref();
            *dictionary.words.entry(word.to_string()).or_insert(0) += 1;
            dictionary.total_tokens += 1;
        }
        dictionary
    }

    /// Train a dictionary from raw corpus text.
    ///
    /// The text is tokenized into lowercase-letter runs; everything else is
    /// discarded as separators. An empty or letter-free corpus yields an
    /// empty dictionary.
    pub fn from_corpus(text: &str) -> Self {
        let tokenizer = WordTokenizer::default();
        Self::from_tokens(tokenizer.tokenize(text))
    }

    /// Train a dictionary from the contents of a corpus file.
    pub fn load_from_corpus_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_corpus(&text))
    }

    /// Check if a word was observed during training.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Get the frequency of a word, or 0 if it is unknown.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Get the number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total number of tokens consumed during training.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Check whether the dictionary contains no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the most frequent words, highest count first.
    ///
    /// Words sharing a count are ordered alphabetically so the result is
    /// deterministic.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u32)> {
        let mut word_freq: Vec<(String, u32)> = self
            .words
            .iter()
            .map(|(word, freq)| (word.clone(), *freq))
            .collect();

        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_freq.truncate(limit);
        word_freq
    }
}
