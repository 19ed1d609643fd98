//! Statistical spelling correction for Orthos.
//!
//! This module provides the whole correction pipeline: a frequency
//! dictionary trained from corpus text, single-edit candidate generation,
//! and frequency-ranked correction of misspelled words.

pub mod corrector;
pub mod dictionary;
pub mod edits;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use edits::*;
