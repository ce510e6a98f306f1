//! # Salvia
//!
//! Spelling-correction suggestions against a fixed dictionary, built on a
//! byte trie and a bounded Damerau-Levenshtein beam search.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Trie dictionary with shared-prefix compression and integer state handles
//! - Error-tolerant lookup bounded by an edit-distance cutoff
//! - Corpus-derived priors for ranking suggestions
//! - Two line-oriented corpus formats
//! - Interactive command line front-end

pub mod cli;
pub mod corpus;
pub mod error;
pub mod suggest;
pub mod trie;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
