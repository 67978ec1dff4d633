// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two entry points: the exact Levenshtein distance for one-off comparisons,
//! and a bounded variant for scanning a whole lexicon where almost every word
//! is a non-match and we want to find that out as cheaply as possible.

mod levenshtein;

pub use levenshtein::*;
