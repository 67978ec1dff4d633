//! Runtime contracts for the lexicon and its query results.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on.
//! They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`, loops skipped entirely)
//! 2. **Early failure detection** during development and in the test suite
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                          |
//! |--------------------------------|---------------------------------------------------|
//! | `check_lexicon_well_formed`    | keys normalized, load order mirrors the key map    |
//! | `check_lookup_well_formed`     | ≤ 4 trimmed non-empty definitions, text matches   |
//! | `check_corrections_ranked`     | sorted by (distance, word), no duplicates, bounded |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if an invariant is violated
//! check_lexicon_well_formed(&lexicon);
//!
//! // In release builds, this is a no-op
//! ```

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::types::{Lookup, MAX_DEFINITIONS};
use crate::utils::{normalize, trim_whitespace};

// ============================================================================
// LEXICON CONTRACTS
// ============================================================================

/// Check that a frozen lexicon is internally consistent.
///
/// - every word equals `normalize(word)`
/// - every word in the load order resolves back to its own slot (so keys are unique)
/// - the prefix index covers every word
/// - total entries ≥ distinct words
///
/// # Panics (debug builds only)
#[inline]
pub fn check_lexicon_well_formed(lexicon: &Lexicon) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (slot, entry) in lexicon.entries().iter().enumerate() {
        debug_assert!(
            entry.word == normalize(&entry.word),
            "Contract violation: Lexicon.KeysNormalized - '{}' is not normalized",
            entry.word
        );
        debug_assert!(
            lexicon.slot_of(&entry.word) == Some(slot),
            "Contract violation: Lexicon.OrderMirrorsKeys - '{}' at {} maps to {:?}",
            entry.word,
            slot,
            lexicon.slot_of(&entry.word)
        );
    }

    debug_assert_eq!(
        lexicon.prefix_index().len(),
        lexicon.distinct_word_count(),
        "Contract violation: PrefixIndex.Complete"
    );
    debug_assert!(
        lexicon.total_entry_count() >= lexicon.distinct_word_count(),
        "Contract violation: Lexicon.Counts - {} entries < {} words",
        lexicon.total_entry_count(),
        lexicon.distinct_word_count()
    );
}

// ============================================================================
// QUERY RESULT CONTRACTS
// ============================================================================

/// Check that a `Found` result respects its bounds.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_lookup_well_formed(lookup: &Lookup) {
    if let Lookup::Found { text, definitions } = lookup {
        debug_assert!(
            !definitions.is_empty() && definitions.len() <= MAX_DEFINITIONS,
            "Contract violation: Lookup.Bounded - {} definitions",
            definitions.len()
        );
        for def in definitions {
            debug_assert!(
                !def.is_empty() && trim_whitespace(def) == def,
                "Contract violation: Lookup.Trimmed - {:?}",
                def
            );
        }
        debug_assert!(
            text.starts_with("1. "),
            "Contract violation: Lookup.Numbered - {:?}",
            text
        );
    }
}

/// Check that ranked corrections are sorted, unique and bounded.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_corrections_ranked(ranked: &[(usize, &str)], max_distance: usize, limit: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert!(
        ranked.len() <= limit,
        "Contract violation: Corrections.Bounded - {} > {}",
        ranked.len(),
        limit
    );

    let mut seen = HashSet::with_capacity(ranked.len());
    for (i, &(distance, word)) in ranked.iter().enumerate() {
        debug_assert!(
            (1..=max_distance).contains(&distance),
            "Contract violation: Corrections.InRange - '{}' at distance {}",
            word,
            distance
        );
        debug_assert!(
            seen.insert(word),
            "Contract violation: Corrections.Unique - '{}' repeated",
            word
        );
        if i > 0 {
            debug_assert!(
                ranked[i - 1] < ranked[i],
                "Contract violation: Corrections.Sorted - {:?} before {:?}",
                ranked[i - 1],
                ranked[i]
            );
        }
    }
}
