// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit distance.
//!
//! The bounded variant prunes aggressively. If an early exit fires too soon it
//! silently drops valid corrections, so it is checked against the full table.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexis::{edit_distance, edit_distance_within};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let max = usize::from(input.max % 8);

    let full = edit_distance(&a, &b);

    // INVARIANT 1: symmetric
    assert_eq!(full, edit_distance(&b, &a), "asymmetric for {:?} / {:?}", a, b);

    // INVARIANT 2: zero iff equal
    assert_eq!(full == 0, a == b);

    // INVARIANT 3: bounded by the longer byte length, at least the length gap
    let (la, lb) = (a.len(), b.len());
    assert!(full <= la.max(lb));
    assert!(full >= la.abs_diff(lb));

    // INVARIANT 4: bounded variant agrees wherever it answers
    match edit_distance_within(&a, &b, max) {
        Some(d) => assert_eq!(d, full, "bounded {} != full {} for {:?} / {:?}", d, full, a, b),
        None => assert!(full > max, "bounded gave up at {} but distance is {}", max, full),
    }
});
