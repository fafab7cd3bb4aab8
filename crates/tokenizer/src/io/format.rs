//! Format definitions for tokenizer serialization.
//!
//! The on-disk record is JSON with a fixed shape. Unknown or missing
//! fields are rejected instead of being guessed at.

use serde::{Deserialize, Serialize};

/// Version written into every saved record.
pub const FORMAT_VERSION: &str = "1";

/// A single merge rule: `pair` was merged into token `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializedMerge {
    /// The pair of token IDs being merged
    pub pair: [u32; 2],
    /// The ID created by this merge
    pub id: u32,
}

/// A vocabulary entry. Bytes are stored as numbers since a token need not
/// be valid UTF-8 on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializedToken {
    pub id: u32,
    pub bytes: Vec<u8>,
}

/// Complete tokenizer serialization format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializedTokenizer {
    /// Format version
    pub version: String,
    /// Target vocabulary size the model was trained with
    pub vocab_size: usize,
    /// Merge rules, in ID order
    pub merges: Vec<SerializedMerge>,
    /// Every token, in ID order
    pub vocab: Vec<SerializedToken>,
}
