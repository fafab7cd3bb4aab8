//! Bytepair-core - Core BPE algorithm implementation
//!
//! This crate provides the fundamental data structures and algorithms for
//! byte-level byte-pair encoding (BPE).
//!
//! # Features
//!
//! - Dense, append-only merge table where a merge's ID is its priority
//! - Byte vocabulary where every learned token is the concatenation of two
//!   earlier ones
//! - Pair counting and greedy, non-overlapping merge application
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::{ByteLevelEncoder, MergeRules, Vocabulary};
//!
//! let mut merges = MergeRules::new();
//! let mut vocab = Vocabulary::new();
//! let id = merges.push((b'a' as u32, b'a' as u32))?;
//! vocab.add_merge((b'a' as u32, b'a' as u32), id)?;
//!
//! let encoder = ByteLevelEncoder::new(merges, vocab);
//! assert_eq!(encoder.encode("aa"), vec![256]);
//! assert_eq!(encoder.decode(&[256])?, "aa");
//! # Ok::<(), bytepair_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE algorithm modules
pub mod core;
pub use core::{
    count_pairs, merge_pair, MergeCandidate, MergeMap, MergeRules, Pair, PairCounts, VocabR,
    Vocabulary, BYTE_VOCAB_SIZE, FIRST_MERGE_ID,
};

// Encoding
pub mod encoding;
pub use encoding::ByteLevelEncoder;
