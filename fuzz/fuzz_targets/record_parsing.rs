// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dataset line parsing.
//!
//! Any byte sequence is a possible dataset line. Parsing must never panic,
//! must always produce at least one field, and a record that comes out must
//! have a non-empty trimmed word.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexis::{load_reader, parse_fields, trim_whitespace, Record};

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);

    for physical in line.split('\n') {
        let fields = parse_fields(physical);
        assert!(!fields.is_empty(), "no fields for {:?}", physical);

        // INVARIANT: without quotes, fields are exactly the comma split
        if !physical.contains('"') {
            let split: Vec<&str> = physical.split(',').collect();
            assert_eq!(fields, split, "unquoted split mismatch for {:?}", physical);
        }

        if let Some(record) = Record::from_line(physical) {
            assert!(!record.word.is_empty());
            assert_eq!(trim_whitespace(&record.word), record.word);
        }
    }

    // INVARIANT: the loader accepts anything and its counters add up
    let (lexicon, stats) = load_reader(data).expect("in-memory reader cannot fail");
    assert_eq!(stats.lines, stats.blank_lines + stats.skipped_records + stats.entries);
    assert_eq!(lexicon.total_entry_count(), stats.entries);
    assert!(lexicon.distinct_word_count() <= stats.entries);
});
