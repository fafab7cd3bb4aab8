//! Core BPE algorithm implementation.
//!
//! This module contains the fundamental data structures and algorithms
//! for byte-pair encoding, shared by training and encoding.

pub mod candidate;
pub mod merges;
pub mod pairs;
pub mod vocab;

pub use candidate::MergeCandidate;
pub use merges::{MergeMap, MergeRules, Pair, BYTE_VOCAB_SIZE, FIRST_MERGE_ID};
pub use pairs::{count_pairs, merge_pair, PairCounts};
pub use vocab::{VocabR, Vocabulary};
