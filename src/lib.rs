//! # Lapsus
//!
//! A spelling-tolerant token corrector: it rewrites misspelled language
//! keywords in source text and misspelled long-option names on the command
//! line into their canonical forms, then hands the corrected text to a
//! downstream executor it does not implement.
//!
//! ## Features
//!
//! - Deterministic whole-word rewriting driven by a misspelling table
//! - Adaptive fuzzy matching for near-misses the table does not know
//! - One generic corrector instantiated for keywords and for CLI options
//! - An executor seam with an explicit failure taxonomy

pub mod cli;
pub mod correction;
pub mod error;
pub mod exec;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
