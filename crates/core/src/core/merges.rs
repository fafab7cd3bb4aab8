//! Merge rule management for BPE.
//!
//! Merge rules are keyed by pairs of token IDs. The ID assigned to a merge
//! doubles as its priority: a lower ID was learned earlier and is applied
//! first when encoding.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;

/// A pair of adjacent token IDs that can be merged.
pub type Pair = (u32, u32);

/// Merge rule mapping: pair -> new_token_id.
pub type MergeMap = AHashMap<Pair, u32>;

/// Number of base tokens, one per byte value.
pub const BYTE_VOCAB_SIZE: usize = 256;

/// ID given to the first learned merge.
pub const FIRST_MERGE_ID: u32 = BYTE_VOCAB_SIZE as u32;

/// Append-only collection of BPE merge rules with O(1) lookup.
///
/// The i-th rule pushed always receives ID `256 + i`.
#[derive(Debug, Clone, Default)]
pub struct MergeRules {
    /// Merge rules: pair -> new_token_id
    merges: MergeMap,
    /// Pairs in learning order; index i holds the pair of ID 256 + i
    order: Vec<Pair>,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new collection with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            merges: MergeMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Rebuild merge rules from pairs listed in learning order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = Pair>) -> Result<Self> {
        let mut rules = Self::new();
        for pair in pairs {
            rules.push(pair)?;
        }
        Ok(rules)
    }

    /// ID the next pushed merge will receive.
    #[inline]
    pub fn next_id(&self) -> u32 {
        FIRST_MERGE_ID + self.order.len() as u32
    }

    /// Record a new merge and return its ID.
    ///
    /// Both halves of the pair must already be defined (a byte or an
    /// earlier merge), and a pair can only be merged once.
    pub fn push(&mut self, pair: Pair) -> Result<u32> {
        let id = self.next_id();

        if pair.0 >= id || pair.1 >= id {
            return Err(TokenizerError::InvalidMerge(format!(
                "pair ({}, {}) references an id not below {}",
                pair.0, pair.1, id
            )));
        }
        if self.merges.contains_key(&pair) {
            return Err(TokenizerError::InvalidMerge(format!(
                "pair ({}, {}) is already merged",
                pair.0, pair.1
            )));
        }

        self.merges.insert(pair, id);
        self.order.push(pair);
        Ok(id)
    }

    /// Get the merged token ID for a pair, if this pair has a rule.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<u32> {
        self.merges.get(&pair).copied()
    }

    /// Get the pair that produced a merge ID.
    #[inline]
    pub fn pair_of(&self, id: u32) -> Option<Pair> {
        let index = id.checked_sub(FIRST_MERGE_ID)? as usize;
        self.order.get(index).copied()
    }

    /// Iterate over `(pair, id)` in learning order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, u32)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(i, &pair)| (pair, FIRST_MERGE_ID + i as u32))
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// `merges` is derived from `order`.
impl PartialEq for MergeRules {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for MergeRules {}
