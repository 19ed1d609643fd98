//! Text analysis for dictionary training.

pub mod tokenizer;

// Re-export commonly used types
pub use tokenizer::*;
