//! Byte-level BPE encoding.
//!
//! Text is treated as its raw UTF-8 bytes. Encoding replays learned merges
//! from earliest to latest; decoding concatenates token bytes.

use crate::core::{count_pairs, merge_pair, MergeRules, Vocabulary};
use crate::{Result, TokenizerError};
use std::sync::Arc;

/// Byte-level encoder sharing merge rules and vocabulary through `Arc`.
///
/// Both tables are read-only here, so one encoder can serve any number of
/// concurrent `encode`/`decode` calls.
#[derive(Debug, Clone)]
pub struct ByteLevelEncoder {
    merges: Arc<MergeRules>,
    vocab: Arc<Vocabulary>,
}

impl ByteLevelEncoder {
    /// Create an encoder that owns its tables.
    pub fn new(merges: MergeRules, vocab: Vocabulary) -> Self {
        Self::with_arcs(Arc::new(merges), Arc::new(vocab))
    }

    /// Create an encoder over shared tables.
    pub fn with_arcs(merges: Arc<MergeRules>, vocab: Arc<Vocabulary>) -> Self {
        Self { merges, vocab }
    }

    /// Encoder with no merges: every byte is its own token.
    pub fn bytes_only() -> Self {
        Self::new(MergeRules::new(), Vocabulary::new())
    }

    /// Merge rules used by this encoder.
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    /// Vocabulary used by this encoder.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Encode text to token IDs.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encode raw bytes to token IDs.
    ///
    /// Each round merges the present pair with the lowest merge ID, which
    /// reproduces the order the merges were learned in.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Vec<u32> {
        let mut ids: Vec<u32> = bytes.iter().map(|&b| u32::from(b)).collect();

        while ids.len() >= 2 {
            let earliest = count_pairs(&ids)
                .keys()
                .filter_map(|&pair| self.merges.get(pair).map(|id| (id, pair)))
                .min();

            match earliest {
                Some((id, pair)) => ids = merge_pair(&ids, pair, id),
                None => break,
            }
        }

        ids
    }

    /// Concatenate the bytes of each token.
    ///
    /// Fails on the first ID that has no vocabulary entry.
    pub fn decode_bytes(&self, ids: &[u32]) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(ids.len() * 2);

        for &id in ids {
            let token = self
                .vocab
                .get(id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            bytes.extend_from_slice(token);
        }

        Ok(bytes)
    }

    /// Decode token IDs back to text.
    ///
    /// Invalid UTF-8 spans are replaced with U+FFFD rather than failing.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        let bytes = self.decode_bytes(ids)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for ByteLevelEncoder {
    fn default() -> Self {
        Self::bytes_only()
    }
}
