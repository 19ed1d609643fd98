//! # Orthos
//!
//! A statistical spelling corrector built on corpus word frequencies.
//!
//! ## Features
//!
//! - Frequency dictionary trained from raw corpus text
//! - Single-edit candidate generation over the `a`-`z` alphabet
//! - Known-word restriction of the two-edit neighborhood
//! - Frequency-ranked correction with deterministic tie-breaking
//!
//! ## Example
//!
//! ```
//! use orthos::spelling::SpellCorrector;
//!
//! let corrector = SpellCorrector::from_corpus("the cat sat on the mat");
//! assert_eq!(corrector.correct("caat"), "cat");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{OrthosError, Result};
    pub use crate::spelling::{Correction, FrequencyDictionary, SpellCorrector};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
