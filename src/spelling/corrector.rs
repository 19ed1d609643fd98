//! Frequency-ranked spelling correction.

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::FrequencyDictionary;
use crate::spelling::edits::{EditSet, edits1};

/// The outcome of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The word as it was queried.
    pub input: String,
    /// The proposed correction, or the input unchanged if nothing better
    /// was found.
    pub output: String,
    /// Frequency of the output word in the dictionary (0 if the input was
    /// echoed back unknown).
    pub frequency: u32,
    /// Whether the output differs from the input.
    pub changed: bool,
}

/// A spelling corrector backed by a trained frequency dictionary.
///
/// Correction is a total function: every query deterministically produces
/// an output word, falling back to the unmodified input when no known word
/// lies within edit distance 2.
///
/// The dictionary is read-only after construction, so a corrector can be
/// shared freely across threads behind a shared reference.
#[derive(Debug, Clone)]
pub struct SpellCorrector {
    dictionary: FrequencyDictionary,
}

impl SpellCorrector {
    /// Create a corrector over an already-trained dictionary.
    pub fn new(dictionary: FrequencyDictionary) -> Self {
        SpellCorrector { dictionary }
    }

    /// Train a dictionary from corpus text and build a corrector over it.
    pub fn from_corpus(text: &str) -> Self {
        Self::new(FrequencyDictionary::from_corpus(text))
    }

    /// Access the underlying frequency dictionary.
    pub fn dictionary(&self) -> &FrequencyDictionary {
        &self.dictionary
    }

    /// Check if a word was observed during training.
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Filter candidates down to the known words, preserving input order.
    pub fn known<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.dictionary.contains(candidate.as_ref()))
            .map(|candidate| candidate.as_ref().to_string())
            .collect()
    }

    /// All known words exactly two edits away from `word`, deduplicated in
    /// first-generation order.
    ///
    /// Unknown second edits are discarded as they are produced; the full
    /// quadratic edit-2 neighborhood is never materialized.
    pub fn known_edits2(&self, word: &str) -> Vec<String> {
        let mut set = EditSet::new();
        for e1 in edits1(word) {
            for e2 in edits1(&e1) {
                if self.dictionary.contains(&e2) {
                    set.insert(e2);
                }
            }
        }
        set.into_vec()
    }

    /// Correct a single word.
    ///
    /// Candidate sets are tried in strict priority order, stopping at the
    /// first non-empty one: the word itself if known, then known words one
    /// edit away, then known words two edits away. The highest-frequency
    /// candidate wins; on a tie the first one generated is kept. If every
    /// set is empty the input is returned unchanged.
    ///
    /// The query is used verbatim — no lowercasing or trimming is applied,
    /// so normalization is the caller's responsibility.
    pub fn correct(&self, word: &str) -> String {
        let candidates = self.candidates(word);

        let mut best: Option<&String> = None;
        let mut best_frequency = 0;
        for candidate in &candidates {
            let frequency = self.dictionary.frequency(candidate);
            if frequency > best_frequency {
                best_frequency = frequency;
                best = Some(candidate);
            }
        }

        match best {
            Some(candidate) => candidate.clone(),
            None => word.to_string(),
        }
    }

    /// Correct a word and report the outcome.
    pub fn correction(&self, word: &str) -> Correction {
        let output = self.correct(word);
        Correction {
            changed: output != word,
            frequency: self.dictionary.frequency(&output),
            input: word.to_string(),
            output,
        }
    }

    /// The first non-empty candidate set in priority order, or empty if no
    /// known word is within edit distance 2.
    fn candidates(&self, word: &str) -> Vec<String> {
        let identity = self.known([word]);
        if !identity.is_empty() {
            return identity;
        }

        let one_edit = self.known(edits1(word));
        if !one_edit.is_empty() {
            return one_edit;
        }

        self.known_edits2(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector_with_counts(entries: &[(&str, u32)]) -> SpellCorrector {
        let mut tokens = Vec::new();
        for &(word, count) in entries {
            for _ in 0..count {
                tokens.push(word);
            }
        }
        SpellCorrector::new(FrequencyDictionary::from_tokens(tokens))
    }

    #[test]
    fn test_known_preserves_order() {
        let corrector = corrector_with_counts(&[("cat", 1), ("mat", 1)]);

        let known = corrector.known(["mat", "bat", "cat"]);
        assert_eq!(known, vec!["mat".to_string(), "cat".to_string()]);
    }

    #[test]
    fn test_identity_preference() {
        // A known word is returned as-is even when a far more frequent
        // neighbor is one edit away.
        let corrector = corrector_with_counts(&[("cot", 1), ("cat", 100)]);

        assert_eq!(corrector.correct("cot"), "cot");
    }

    #[test]
    fn test_frequency_ranking_at_one_edit() {
        let corrector = corrector_with_counts(&[("cat", 10), ("cot", 2), ("cut", 1)]);

        // "cit" is one edit from all three; the most frequent wins.
        assert_eq!(corrector.correct("cit"), "cat");
    }

    #[test]
    fn test_two_edit_fallback() {
        // No known word within one edit of "spelin", but "spelling" is two
        // inserts away.
        let corrector = corrector_with_counts(&[("spelling", 1)]);

        assert!(corrector.known(edits1("spelin")).is_empty());
        assert_eq!(corrector.correct("spelin"), "spelling");
    }

    #[test]
    fn test_known_edits2() {
        let corrector = corrector_with_counts(&[("spelling", 1), ("cat", 5)]);

        let two = corrector.known_edits2("spelin");
        assert_eq!(two, vec!["spelling".to_string()]);
    }

    #[test]
    fn test_unchanged_fallback() {
        let corrector = corrector_with_counts(&[("abcdefgh", 3)]);

        // Nothing within two edits of "zz".
        assert_eq!(corrector.correct("zz"), "zz");
    }

    #[test]
    fn test_empty_dictionary_echoes_input() {
        let corrector = SpellCorrector::new(FrequencyDictionary::new());

        assert_eq!(corrector.correct("anything"), "anything");
        assert_eq!(corrector.correct(""), "");
    }

    #[test]
    fn test_empty_query() {
        // A zero-length query degenerates to pure insertions.
        let corrector = corrector_with_counts(&[("a", 4), ("i", 9)]);

        assert_eq!(corrector.correct(""), "i");
    }

    #[test]
    fn test_query_is_not_normalized() {
        let corrector = corrector_with_counts(&[("cat", 10)]);

        // No known word within two edits of the all-caps form; it comes
        // back untouched.
        assert_eq!(corrector.correct("CAT"), "CAT");
    }

    #[test]
    fn test_trusts_training_data() {
        // A trained word is never "corrected", however misspelled it looks.
        let corrector = SpellCorrector::from_corpus("speling");

        assert_eq!(corrector.correct("speling"), "speling");
    }

    #[test]
    fn test_determinism() {
        let corrector = corrector_with_counts(&[("hello", 3), ("world", 2)]);

        let first = corrector.correct("helo");
        for _ in 0..10 {
            assert_eq!(corrector.correct("helo"), first);
        }
    }

    #[test]
    fn test_tie_breaks_by_generation_order() {
        // "hat" and "rat" tie at frequency 2, both one substitution from
        // "vat". Substitutions run a-z, so "hat" is generated first and
        // wins the tie.
        let corrector = corrector_with_counts(&[("rat", 2), ("hat", 2)]);

        assert_eq!(corrector.correct("vat"), "hat");
    }

    #[test]
    fn test_correction_report() {
        let corrector = corrector_with_counts(&[("hello", 7)]);

        let report = corrector.correction("helo");
        assert_eq!(report.input, "helo");
        assert_eq!(report.output, "hello");
        assert_eq!(report.frequency, 7);
        assert!(report.changed);

        let report = corrector.correction("zzzz");
        assert_eq!(report.output, "zzzz");
        assert_eq!(report.frequency, 0);
        assert!(!report.changed);
    }
}
