// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for queries against an arbitrary lexicon.
//!
//! Builds a lexicon from fuzzer-chosen words and checks suggestion and
//! correction results against brute-force scans of the load order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexis::{correct, edit_distance, lookup, normalize, suggest, Lexicon, MAX_DEFINITIONS};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    entries: Vec<(String, String)>,
    query: String,
    max_distance: u8,
    limit: u8,
}

fuzz_target!(|input: QueryInput| {
    if input.entries.len() > 200 {
        return;
    }
    let lexicon = Lexicon::from_pairs(input.entries.iter().map(|(w, d)| (w.as_str(), d.as_str())));
    let query: String = input.query.chars().take(32).collect();
    let max_distance = usize::from(input.max_distance % 4);
    let limit = usize::from(input.limit % 32);

    // Lookup never returns more than the cap
    assert!(lookup(&lexicon, &query).definitions().len() <= MAX_DEFINITIONS);

    // Suggestions equal a linear scan in load order
    let needle = normalize(&query);
    let expected: Vec<&str> = lexicon
        .words()
        .filter(|w| w.starts_with(&needle))
        .take(limit)
        .collect();
    assert_eq!(suggest(&lexicon, &query, limit), expected);

    // Corrections equal a sorted brute-force scan
    let mut scored: Vec<(usize, &str)> = lexicon
        .words()
        .map(|w| (edit_distance(&needle, w), w))
        .filter(|(d, _)| (1..=max_distance).contains(d))
        .collect();
    scored.sort();
    let expected: Vec<&str> = scored.into_iter().map(|(_, w)| w).take(limit).collect();
    assert_eq!(correct(&lexicon, &query, max_distance, limit), expected);
});
