//! Single-edit candidate generation.
//!
//! For a word of length n, the four edit families produce n deletions,
//! n−1 transpositions, 26·n substitutions, and 26·(n+1) insertions before
//! deduplication, so the deduplicated result never exceeds 54n + 25
//! distinct strings. Substitutions that reproduce the original word are
//! generated like any other and collapse only through deduplication.

use ahash::AHashSet;

/// An insertion-ordered set of candidate strings.
///
/// Membership is hash-based, but iteration order is the order in which
/// candidates were first inserted, keeping edit generation deterministic.
#[derive(Debug, Default)]
pub struct EditSet {
    seen: AHashSet<String>,
    items: Vec<String>,
}

impl EditSet {
    /// Create a new empty edit set.
    pub fn new() -> Self {
        EditSet::default()
    }

    /// Create a new edit set with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        EditSet {
            seen: AHashSet::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
        }
    }

    /// Insert a candidate, returning true if it was not already present.
    pub fn insert(&mut self, candidate: String) -> bool {
        if self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.items.push(candidate);
        true
    }

    /// Check if a candidate is already in the set.
    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    /// Get the number of distinct candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// View the candidates in first-insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Consume the set, yielding the candidates in first-insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Generate every string reachable from `word` by one primitive edit:
/// a deletion, an adjacent transposition, a substitution, or an insertion
/// over the alphabet `a`-`z`.
///
/// The result is deduplicated and ordered by first generation, so repeated
/// calls produce identical sequences. A zero-length word has no deletions,
/// transpositions, or substitutions and yields the 26 single-letter
/// insertions only.
pub fn edits1(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut set = EditSet::with_capacity(54 * n + 26);

    // Deletions: drop the character at each position.
    for i in 0..n {
        let mut edit = String::with_capacity(word.len());
        edit.extend(&chars[..i]);
        edit.extend(&chars[i + 1..]);
        set.insert(edit);
    }

    // Transpositions: swap each adjacent pair.
    for i in 0..n.saturating_sub(1) {
        let mut edit = chars.clone();
        edit.swap(i, i + 1);
        set.insert(edit.into_iter().collect());
    }

    // Substitutions: replace each position with every letter. A letter equal
    // to the one it replaces is not excluded; the set collapses it.
    for c in 'a'..='z' {
        for i in 0..n {
            let mut edit = chars.clone();
            edit[i] = c;
            set.insert(edit.into_iter().collect());
        }
    }

    // Insertions: put every letter at each of the n + 1 split points.
    for c in 'a'..='z' {
        for i in 0..=n {
            let mut edit = chars.clone();
            edit.insert(i, c);
            set.insert(edit.into_iter().collect());
        }
    }

    set.into_vec()
}
