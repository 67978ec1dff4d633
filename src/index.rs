//! Sorted prefix index over the distinct-word order.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SORTED**: `words[sorted[i-1]] <= words[sorted[i]]` for every `i`
//! 2. **PERMUTATION**: `sorted` holds every ordinal `0..words.len()` exactly once
//! 3. **LOAD_ORDER_RESULTS**: `first_matches` returns exactly what a linear scan of
//!    the load order would return, just without scanning everything
//!
//! # Why ordinals
//!
//! Suggestions must come back in load order, not alphabetical order. Sorting by word
//! makes every prefix a contiguous block (found by two binary searches), and keeping
//! the load ordinal rather than the string means we can re-sort the block back into
//! load order and cut it at `limit`.

use std::cmp::Ordering;

/// Word ordinals (positions in the load order) sorted by word.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    sorted: Vec<usize>,
}

impl PrefixIndex {
    /// Build the index for a load-ordered word list.
    pub fn build<S: AsRef<str>>(words: &[S]) -> Self {
        let mut sorted: Vec<usize> = (0..words.len()).collect();
        // Stable: equal words (never produced by the lexicon) keep load order
        sorted.sort_by(|&a, &b| words[a].as_ref().cmp(words[b].as_ref()));
        Self { sorted }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Ordinals of every word starting with `prefix`, in alphabetical order.
    ///
    /// Binary search for the first word `>= prefix`, then for the first word after
    /// that which no longer starts with `prefix`. Everything in between matches.
    pub fn matching<'a, S: AsRef<str>>(&'a self, words: &[S], prefix: &str) -> &'a [usize] {
        let start = self
            .sorted
            .partition_point(|&ord| words[ord].as_ref().cmp(prefix) == Ordering::Less);
        let len = self.sorted[start..].partition_point(|&ord| words[ord].as_ref().starts_with(prefix));
        &self.sorted[start..start + len]
    }

    /// The first `limit` ordinals, in load order, whose words start with `prefix`.
    pub fn first_matches<S: AsRef<str>>(&self, words: &[S], prefix: &str, limit: usize) -> Vec<usize> {
        if limit == 0 {
            return Vec::new();
        }
        if prefix.is_empty() {
            // Every word matches; the head of the load order is the answer
            return (0..words.len().min(limit)).collect();
        }

        let mut ordinals = self.matching(words, prefix).to_vec();
        if ordinals.len() > limit {
            ordinals.select_nth_unstable(limit - 1);
            ordinals.truncate(limit);
        }
        ordinals.sort_unstable();
        ordinals
    }
}
