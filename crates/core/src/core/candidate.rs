//! Ordering of merge candidates during training.

use crate::core::merges::Pair;
use crate::core::pairs::PairCounts;
use std::cmp::Ordering;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of token IDs to merge
    pub pair: Pair,
    /// The frequency/count of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }

    /// Pick the winning candidate from a set of pair counts.
    ///
    /// Returns None when there are no pairs.
    pub fn best(counts: &PairCounts) -> Option<Self> {
        counts
            .iter()
            .map(|(&pair, &count)| Self::new(pair, count))
            .max()
    }
}

// Higher count wins; on equal counts the lower pair wins, so the result
// never depends on hash map iteration order.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
