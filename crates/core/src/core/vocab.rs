//! Vocabulary storage and lookup.
//!
//! Every token ID maps to the raw bytes it stands for. IDs are dense:
//! 0..=255 are the single bytes, learned merges follow in order.

use crate::core::merges::{Pair, BYTE_VOCAB_SIZE};
use crate::error::{Result, TokenizerError};

/// Reverse mapping: ID -> token bytes, indexed by ID.
pub type VocabR = Vec<Vec<u8>>;

/// Byte-level vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Token bytes, indexed by ID
    tokens: VocabR,
}

impl Vocabulary {
    /// Create a vocabulary holding only the 256 single-byte tokens.
    pub fn new() -> Self {
        Self::with_capacity(BYTE_VOCAB_SIZE)
    }

    /// Create the byte vocabulary with room for `capacity` tokens in total.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut tokens = Vec::with_capacity(capacity.max(BYTE_VOCAB_SIZE));
        tokens.extend((0..=u8::MAX).map(|b| vec![b]));
        Self { tokens }
    }

    /// Add the token produced by merging `pair` under `id`.
    ///
    /// The bytes are the concatenation of both halves and are computed once.
    /// `id` must be the next free ID.
    pub fn add_merge(&mut self, pair: Pair, id: u32) -> Result<()> {
        if id as usize != self.tokens.len() {
            return Err(TokenizerError::InvalidMerge(format!(
                "merge id {} is not the next free id {}",
                id,
                self.tokens.len()
            )));
        }

        let mut bytes = self
            .get(pair.0)
            .ok_or(TokenizerError::UnknownTokenId(pair.0))?
            .to_vec();
        bytes.extend_from_slice(
            self.get(pair.1)
                .ok_or(TokenizerError::UnknownTokenId(pair.1))?,
        );

        self.tokens.push(bytes);
        Ok(())
    }

    /// Get the bytes for an ID.
    #[inline]
    pub fn get(&self, id: u32) -> Option<&[u8]> {
        self.tokens.get(id as usize).map(Vec::as_slice)
    }

    /// Check whether an ID is known.
    #[inline]
    pub fn contains(&self, id: u32) -> bool {
        (id as usize) < self.tokens.len()
    }

    /// Iterate over `(id, bytes)` in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u8])> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(id, bytes)| (id as u32, bytes.as_slice()))
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: the byte tokens are present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_tokens() {
        let vocab = Vocabulary::new();

        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.get(0), Some(&[0u8][..]));
        assert_eq!(vocab.get(b'a' as u32), Some(&b"a"[..]));
        assert_eq!(vocab.get(255), Some(&[255u8][..]));
        assert_eq!(vocab.get(256), None);
    }

    #[test]
    fn test_add_merge_concatenates() {
        let mut vocab = Vocabulary::new();
        vocab.add_merge((b'a' as u32, b'a' as u32), 256).unwrap();
        vocab.add_merge((256, 256), 257).unwrap();
        vocab.add_merge((b'b' as u32, 257), 258).unwrap();

        assert_eq!(vocab.get(256), Some(&b"aa"[..]));
        assert_eq!(vocab.get(257), Some(&b"aaaa"[..]));
        assert_eq!(vocab.get(258), Some(&b"baaaa"[..]));
        assert_eq!(vocab.len(), 259);
    }

    #[test]
    fn test_add_merge_requires_next_id() {
        let mut vocab = Vocabulary::new();

        assert!(vocab.add_merge((1, 2), 300).is_err());
        assert!(matches!(
            vocab.add_merge((1, 999), 256),
            Err(TokenizerError::UnknownTokenId(999))
        ));
        assert_eq!(vocab.len(), 256);
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut vocab = Vocabulary::new();
        vocab.add_merge((104, 105), 256).unwrap();

        let last = vocab.iter().last().unwrap();
        assert_eq!(last, (256, &b"hi"[..]));
        assert!(vocab.iter().take(256).all(|(id, bytes)| bytes == [id as u8]));
    }
}
