//! Adjacent-pair counting and merge application.
//!
//! These two passes are shared by training and encoding.

use crate::core::merges::Pair;
use ahash::AHashMap;

/// Pair -> number of adjacent occurrences.
pub type PairCounts = AHashMap<Pair, u64>;

/// Count every adjacent pair `(ids[i], ids[i + 1])`.
///
/// Sequences shorter than two IDs yield an empty map.
pub fn count_pairs(ids: &[u32]) -> PairCounts {
    let mut counts = PairCounts::with_capacity(ids.len().saturating_sub(1));

    for window in ids.windows(2) {
        *counts.entry((window[0], window[1])).or_insert(0) += 1;
    }

    counts
}

/// Replace occurrences of `pair` with `new_id` in a single greedy pass.
///
/// Scanning left to right, a match consumes both positions, so overlapping
/// occurrences are not merged twice: `[a, a, a]` on `(a, a)` becomes
/// `[new_id, a]`.
pub fn merge_pair(ids: &[u32], pair: Pair, new_id: u32) -> Vec<u32> {
    let mut merged = Vec::with_capacity(ids.len());
    let mut i = 0;

    while i < ids.len() {
        if i + 1 < ids.len() && ids[i] == pair.0 && ids[i + 1] == pair.1 {
            merged.push(new_id);
            i += 2;
        } else {
            merged.push(ids[i]);
            i += 1;
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pairs() {
        let counts = count_pairs(&[1, 2, 3, 1, 2]);

        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get(&(1, 2)), Some(&2));
        assert_eq!(counts.get(&(2, 3)), Some(&1));
        assert_eq!(counts.get(&(3, 1)), Some(&1));
    }

    #[test]
    fn test_count_pairs_overlapping() {
        // Counting is not greedy: every window counts
        let counts = count_pairs(&[7, 7, 7]);
        assert_eq!(counts.get(&(7, 7)), Some(&2));
    }

    #[test]
    fn test_count_pairs_short_input() {
        assert!(count_pairs(&[]).is_empty());
        assert!(count_pairs(&[42]).is_empty());
    }

    #[test]
    fn test_merge_pair() {
        let merged = merge_pair(&[1, 2, 3, 1, 2], (1, 2), 256);
        assert_eq!(merged, vec![256, 3, 256]);
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        let a = b'A' as u32;
        assert_eq!(merge_pair(&[a, a, a], (a, a), 256), vec![256, a]);
        assert_eq!(merge_pair(&[a, a, a, a], (a, a), 256), vec![256, 256]);
    }

    #[test]
    fn test_merge_pair_no_match() {
        let ids = [1, 2, 3];
        assert_eq!(merge_pair(&ids, (3, 1), 256), ids.to_vec());
        assert_eq!(merge_pair(&[], (3, 1), 256), Vec::<u32>::new());
        assert_eq!(merge_pair(&[3], (3, 1), 256), vec![3]);
    }
}
