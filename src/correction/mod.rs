//! Keyword and option spelling correction.
//!
//! This module provides the token-correction engine: a misspelling table
//! mapping canonical tokens to known alternate spellings, a whole-word
//! exact rewriter, an adaptive fuzzy matcher for near-misses, and the two
//! corrector instantiations built on top of them (source keywords and CLI
//! long options).

pub mod corrector;
pub mod fuzzy;
pub mod levenshtein;
pub mod options;
pub mod table;

// Re-export commonly used types
pub use corrector::*;
pub use fuzzy::*;
pub use levenshtein::*;
pub use options::*;
pub use table::*;
