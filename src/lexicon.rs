// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The lexicon store: build once, then freeze.
//!
//! Loading is the only write phase. `LexiconBuilder` accepts registrations;
//! `LexiconBuilder::build` consumes it and hands back a `Lexicon` that has no
//! mutating methods at all. Share it behind an `Arc` and every query thread
//! reads the same data without locks.
//!
//! ```text
//! register("Cat", d1) ──▶ slots["cat"] = 0 ──▶ entries[0] = { "cat", [d1] }
//! register("dog", d2) ──▶ slots["dog"] = 1 ──▶ entries[1] = { "dog", [d2] }
//! register("CAT", d3) ──▶ slots["cat"] = 0 ──▶ entries[0] = { "cat", [d1, d3] }
//! ```
//!
//! `entries` is the distinct-word order: append-only, one slot per word, in the
//! order words were first seen.

use std::collections::HashMap;

use crate::contracts::check_lexicon_well_formed;
use crate::index::PrefixIndex;
use crate::types::Entry;
use crate::utils::normalize;

/// Write phase of a lexicon.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    slots: HashMap<String, usize>,
    entries: Vec<Entry>,
    total_entries: usize,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one (word, definition) pair.
    ///
    /// The word is normalized. A new word is appended to the load order with an
    /// empty definition list; then the definition is appended, even if empty.
    /// Nothing is rejected here. Skipping empty words is the loader's job.
    pub fn register(&mut self, word: &str, definition: impl Into<String>) {
        let key = normalize(word);
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push(Entry::new(key.clone()));
                self.slots.insert(key, slot);
                slot
            }
        };
        self.entries[slot].definitions.push(definition.into());
        self.total_entries += 1;
    }

    pub fn distinct_word_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_entry_count(&self) -> usize {
        self.total_entries
    }

    /// Freeze into a read-only lexicon and build the prefix index.
    pub fn build(self) -> Lexicon {
        let prefix_index = PrefixIndex::build(&self.entries);

        let lexicon = Lexicon {
            slots: self.slots,
            entries: self.entries,
            total_entries: self.total_entries,
            prefix_index,
        };
        check_lexicon_well_formed(&lexicon);
        lexicon
    }
}

/// A frozen lexicon. Immutable for the rest of the process.
#[derive(Debug, Default)]
pub struct Lexicon {
    slots: HashMap<String, usize>,
    entries: Vec<Entry>,
    total_entries: usize,
    prefix_index: PrefixIndex,
}

impl Lexicon {
    /// Build a lexicon directly from (word, definition) pairs.
    pub fn from_pairs<I, W, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, D)>,
        W: AsRef<str>,
        D: Into<String>,
    {
        let mut builder = LexiconBuilder::new();
        for (word, definition) in pairs {
            builder.register(word.as_ref(), definition);
        }
        builder.build()
    }

    pub fn distinct_word_count(&self) -> usize {
        self.entries.len()
    }

    /// Total (word, definition) pairs registered, duplicates included.
    pub fn total_entry_count(&self) -> usize {
        self.total_entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw definition list for a word, blanks and duplicates included.
    pub fn definitions(&self, word: &str) -> Option<&[String]> {
        self.entry(&normalize(word)).map(|e| e.definitions.as_slice())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.slots.contains_key(&normalize(word))
    }

    /// Entries in distinct-word order (first insertion).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Distinct words in load order.
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Entry for an already-normalized key.
    pub(crate) fn entry(&self, key: &str) -> Option<&Entry> {
        self.slots.get(key).map(|&slot| &self.entries[slot])
    }

    pub(crate) fn slot_of(&self, key: &str) -> Option<usize> {
        self.slots.get(key).copied()
    }

    pub(crate) fn prefix_index(&self) -> &PrefixIndex {
        &self.prefix_index
    }
}
