//! Visited sets for graph traversals.
//!
//! - `VisitedSet`: word-packed bitset for index-addressed vertices
//! - `VisitedLabels`: hash set of borrowed labels for label-addressed vertices
//!
//! Both are created per call and dropped on return.

use std::collections::HashSet;
use std::hash::Hash;

/// A dense, word-packed visited set over vertices `0..len`.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    #[inline]
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0u64; len.div_ceil(64)],
            len,
        }
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    ///
    /// Out-of-range nodes are never visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        if node >= self.len {
            return false;
        }
        let mask = 1u64 << (node % 64);
        let word = &mut self.words[node / 64];
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        node < self.len && self.words[node / 64] & (1u64 << (node % 64)) != 0
    }
}

/// A visited set over borrowed vertex labels.
pub(crate) struct VisitedLabels<'a, L> {
    seen: HashSet<&'a L>,
}

impl<'a, L: Hash + Eq> VisitedLabels<'a, L> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` iff `label` was not yet visited, and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, label: &'a L) -> bool {
        self.seen.insert(label)
    }

    #[inline]
    pub(crate) fn is_visited(&self, label: &L) -> bool {
        self.seen.contains(label)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitset_crosses_word_boundary() {
        let mut visited = VisitedSet::new(130);
        assert!(visited.try_visit(0));
        assert!(visited.try_visit(64));
        assert!(visited.try_visit(129));
        assert!(!visited.try_visit(64));
        assert!(visited.is_visited(129));
        assert!(!visited.is_visited(128));
    }

    #[test]
    fn bitset_ignores_out_of_range() {
        let mut visited = VisitedSet::new(3);
        assert!(!visited.try_visit(3));
        assert!(!visited.is_visited(3));
        assert!(!visited.is_visited(usize::MAX));
    }

    #[test]
    fn labels_track_membership() {
        let a = "a".to_string();
        let b = "b".to_string();
        let mut visited = VisitedLabels::with_capacity(2);
        assert!(visited.try_visit(&a));
        assert!(!visited.try_visit(&a));
        assert!(visited.is_visited(&a));
        assert!(!visited.is_visited(&b));
        assert_eq!(visited.len(), 1);
    }
}
