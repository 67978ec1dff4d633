// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a lexicon.
//!
//! An `Entry` is one normalized word and every definition registered for it.
//! `Lookup` is what an exact query returns. `Limit` and `MaxDistance` turn the
//! signed integers that arrive from the outside world (query strings, CLI flags)
//! into values the query engine can't misinterpret.
//!
//! # Invariants
//!
//! - **Entry**: `word == normalize(word)`. Definitions keep load order, duplicates
//!   and blanks included. Filtering happens at query time, not here.
//!
//! - **Lookup::Found**: `1 <= definitions.len() <= MAX_DEFINITIONS`, every definition
//!   is trimmed and non-empty, and `text` is exactly the numbered rendering of
//!   `definitions`.

use serde::Serialize;

use crate::error::LexiconError;

/// At most this many definitions are returned by an exact lookup.
pub const MAX_DEFINITIONS: usize = 4;

/// Separator between numbered definitions in `Lookup::Found::text`.
pub const DEFINITION_SEPARATOR: &str = "\n\n";

// =============================================================================
// ENTRIES
// =============================================================================

/// One word and its definitions, in the order they were loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub definitions: Vec<String>,
}

impl Entry {
    pub(crate) fn new(word: String) -> Self {
        Self {
            word,
            definitions: Vec::new(),
        }
    }
}

/// Entries index by their word.
impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.word
    }
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// Outcome of an exact lookup.
///
/// A word whose definitions are all blank is indistinguishable from an unknown
/// word: both are `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup {
    Found {
        /// Definitions numbered "1. …", "2. …" and joined by a blank line.
        text: String,
        /// Up to [`MAX_DEFINITIONS`] trimmed, non-empty definitions in load order.
        definitions: Vec<String>,
    },
    NotFound,
}

impl Lookup {
    /// Build a `Found` result, rendering the numbered text.
    pub fn found(definitions: Vec<String>) -> Self {
        let text = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| format!("{}. {}", i + 1, def))
            .collect::<Vec<_>>()
            .join(DEFINITION_SEPARATOR);
        Lookup::Found { text, definitions }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }

    /// The numbered text, if found.
    pub fn text(&self) -> Option<&str> {
        match self {
            Lookup::Found { text, .. } => Some(text),
            Lookup::NotFound => None,
        }
    }

    /// The selected definitions (empty when not found).
    pub fn definitions(&self) -> &[String] {
        match self {
            Lookup::Found { definitions, .. } => definitions,
            Lookup::NotFound => &[],
        }
    }
}

// =============================================================================
// LOAD STATISTICS
// =============================================================================

/// Counters reported by the dataset loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Physical lines read, blank ones included.
    pub lines: usize,
    /// Blank lines skipped.
    pub blank_lines: usize,
    /// Non-blank lines skipped because the word field was empty.
    pub skipped_records: usize,
    /// (word, definition) pairs registered, duplicates included.
    pub entries: usize,
    /// Distinct normalized words after the load.
    pub distinct_words: usize,
}

// =============================================================================
// QUERY PARAMETERS
// =============================================================================

/// Result count limit for suggest/correct.
///
/// Anything `<= 0` means "return nothing". It's never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Limit(pub usize);

impl Limit {
    /// Convert a signed limit from an untrusted source.
    pub fn from_signed(value: i64) -> Self {
        Limit(usize::try_from(value).unwrap_or(0))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

/// Maximum edit distance for a correction query.
///
/// Negative distances are rejected instead of silently meaning "no results".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MaxDistance(pub usize);

impl MaxDistance {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for MaxDistance {
    type Error = LexiconError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(MaxDistance)
            .map_err(|_| LexiconError::NegativeMaxDistance(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_renders_numbered_text() {
        let lookup = Lookup::found(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(lookup.text(), Some("1. first\n\n2. second"));
        assert_eq!(lookup.definitions().len(), 2);
        assert!(lookup.is_found());
    }

    #[test]
    fn test_single_definition_has_no_separator() {
        let lookup = Lookup::found(vec!["a small domestic animal".to_string()]);
        assert_eq!(lookup.text(), Some("1. a small domestic animal"));
    }

    #[test]
    fn test_not_found_accessors() {
        assert!(!Lookup::NotFound.is_found());
        assert_eq!(Lookup::NotFound.text(), None);
        assert!(Lookup::NotFound.definitions().is_empty());
    }

    #[test]
    fn test_limit_from_signed() {
        assert_eq!(Limit::from_signed(10).get(), 10);
        assert_eq!(Limit::from_signed(0).get(), 0);
        assert_eq!(Limit::from_signed(-5).get(), 0);
    }

    #[test]
    fn test_max_distance_rejects_negative() {
        assert_eq!(MaxDistance::try_from(2i64).unwrap().get(), 2);
        assert_eq!(MaxDistance::try_from(0i64).unwrap().get(), 0);
        match MaxDistance::try_from(-1i64) {
            Err(LexiconError::NegativeMaxDistance(-1)) => {}
            other => panic!("expected NegativeMaxDistance, got {:?}", other),
        }
    }
}
