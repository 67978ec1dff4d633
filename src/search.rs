//! Query engine: exact lookup, prefix suggestion, fuzzy correction.
//!
//! All three are pure functions of a frozen `Lexicon` and their arguments.
//! No randomness, no interior mutability, so the same query always gives the
//! same answer and any number of threads can run them at once.
//!
//! # Ordering contracts
//!
//! - `lookup`: definitions in load order, first [`MAX_DEFINITIONS`] non-blank ones
//! - `suggest`: words in load order (first registration), not alphabetical
//! - `correct`: (distance ascending, word ascending)

use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::{check_corrections_ranked, check_lookup_well_formed};
use crate::fuzzy::edit_distance_within;
use crate::lexicon::Lexicon;
use crate::types::{Lookup, MAX_DEFINITIONS};
use crate::utils::{normalize, trim_whitespace};

/// Exact, case-insensitive definition lookup.
///
/// Blank definitions are filtered out here, not at load time. A word that only
/// has blank definitions comes back as `NotFound`.
pub fn lookup(lexicon: &Lexicon, term: &str) -> Lookup {
    let Some(entry) = lexicon.entry(&normalize(term)) else {
        return Lookup::NotFound;
    };

    let definitions: Vec<String> = entry
        .definitions
        .iter()
        .map(|def| trim_whitespace(def))
        .filter(|def| !def.is_empty())
        .take(MAX_DEFINITIONS)
        .map(str::to_string)
        .collect();

    if definitions.is_empty() {
        return Lookup::NotFound;
    }

    let result = Lookup::found(definitions);
    check_lookup_well_formed(&result);
    result
}

/// Up to `limit` words starting with `prefix`, in load order.
///
/// An empty prefix matches everything, so this returns the first `limit` words loaded.
pub fn suggest(lexicon: &Lexicon, prefix: &str, limit: usize) -> Vec<String> {
    let prefix = normalize(prefix);
    let entries = lexicon.entries();

    lexicon
        .prefix_index()
        .first_matches(entries, &prefix, limit)
        .into_iter()
        .map(|ord| entries[ord].word.clone())
        .collect()
}

/// Spelling corrections: words within `max_distance` edits of `term`.
///
/// The term itself (distance 0) is never suggested. Results are ranked by
/// distance, ties broken alphabetically, deduplicated, and cut at `limit`.
pub fn correct(lexicon: &Lexicon, term: &str, max_distance: usize, limit: usize) -> Vec<String> {
    rank_corrections(lexicon, term, max_distance, limit)
        .into_iter()
        .map(|(_, word)| word.to_string())
        .collect()
}

/// Ranked (distance, word) candidates behind [`correct`].
pub fn rank_corrections<'a>(
    lexicon: &'a Lexicon,
    term: &str,
    max_distance: usize,
    limit: usize,
) -> Vec<(usize, &'a str)> {
    if limit == 0 || max_distance == 0 {
        return Vec::new();
    }

    let term = normalize(term);
    let score = |word: &'a str| -> Option<(usize, &'a str)> {
        edit_distance_within(&term, word, max_distance)
            .filter(|&d| d > 0)
            .map(|d| (d, word))
    };

    #[cfg(feature = "parallel")]
    let mut candidates: Vec<(usize, &str)> = lexicon
        .entries()
        .par_iter()
        .filter_map(|e| score(e.word.as_str()))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut candidates: Vec<(usize, &str)> = lexicon
        .entries()
        .iter()
        .filter_map(|e| score(e.word.as_str()))
        .collect();

    candidates.sort_unstable();

    let mut seen = HashSet::with_capacity(limit.min(candidates.len()));
    let ranked: Vec<(usize, &str)> = candidates
        .into_iter()
        .filter(|&(_, word)| seen.insert(word))
        .take(limit)
        .collect();

    check_corrections_ranked(&ranked, max_distance, limit);
    ranked
}
