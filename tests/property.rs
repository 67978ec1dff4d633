//! Property-based tests using proptest.
//!
//! These tests check the query engine's invariants against random lexicons,
//! and check the edit distance against an independent implementation.

mod common;

use std::collections::HashSet;

use common::assert_corrections_well_formed;
use lexis::{
    correct, edit_distance, edit_distance_within, load_reader, lookup, normalize, parse_fields, suggest,
    Lexicon, PrefixIndex, MAX_DEFINITIONS,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet, so random pairs collide and share prefixes.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E]{1,6}").unwrap()
}

/// Arbitrary text including multi-byte characters.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zé日ñ]{0,10}").unwrap()
}

fn lexicon_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((word_strategy(), "[a-z ]{1,12}"), 0..40)
}

fn build(pairs: &[(String, String)]) -> Lexicon {
    Lexicon::from_pairs(pairs.iter().map(|(w, d)| (w.as_str(), d.as_str())))
}

// ============================================================================
// EDIT DISTANCE
// ============================================================================

proptest! {
    #[test]
    fn prop_edit_distance_matches_strsim(a in text_strategy(), b in text_strategy()) {
        let expected = strsim::generic_levenshtein(&a.as_bytes().to_vec(), &b.as_bytes().to_vec());
        prop_assert_eq!(edit_distance(&a, &b), expected);
    }

    #[test]
    fn prop_edit_distance_symmetric(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn prop_edit_distance_zero_iff_equal(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_bounded_distance_agrees(a in text_strategy(), b in text_strategy(), max in 0usize..6) {
        let full = edit_distance(&a, &b);
        let bounded = edit_distance_within(&a, &b, max);
        if full <= max {
            prop_assert_eq!(bounded, Some(full));
        } else {
            prop_assert_eq!(bounded, None);
        }
    }
}

// ============================================================================
// QUERY ENGINE
// ============================================================================

proptest! {
    #[test]
    fn prop_lookup_caps_definitions(pairs in lexicon_strategy()) {
        let lexicon = build(&pairs);
        for (word, _) in &pairs {
            let expected: Vec<String> = lexicon
                .definitions(word)
                .unwrap()
                .iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .take(MAX_DEFINITIONS)
                .collect();

            let result = lookup(&lexicon, word);
            prop_assert_eq!(result.is_found(), !expected.is_empty());
            prop_assert_eq!(result.definitions(), expected.as_slice());
        }
    }

    #[test]
    fn prop_suggest_empty_prefix_returns_head_of_load_order(pairs in lexicon_strategy(), limit in 0usize..50) {
        let lexicon = build(&pairs);
        let result = suggest(&lexicon, "", limit);
        let expected: Vec<&str> = lexicon.words().take(limit).collect();
        prop_assert_eq!(result.len(), limit.min(lexicon.distinct_word_count()));
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_suggest_matches_linear_scan(pairs in lexicon_strategy(), prefix in "[a-eA-E]{0,3}", limit in 0usize..20) {
        let lexicon = build(&pairs);
        let needle = normalize(&prefix);
        let expected: Vec<&str> = lexicon
            .words()
            .filter(|w| w.starts_with(&needle))
            .take(limit)
            .collect();
        prop_assert_eq!(suggest(&lexicon, &prefix, limit), expected);
    }

    #[test]
    fn prop_corrections_ranked_unique_in_range(
        pairs in lexicon_strategy(),
        term in word_strategy(),
        max_distance in 0usize..4,
        limit in 0usize..15,
    ) {
        let lexicon = build(&pairs);
        let result = correct(&lexicon, &term, max_distance, limit);
        assert_corrections_well_formed(&lexicon, &term, max_distance, limit, &result);

        let unique: HashSet<&String> = result.iter().collect();
        prop_assert_eq!(unique.len(), result.len());
    }

    #[test]
    fn prop_corrections_are_complete_prefix(
        pairs in lexicon_strategy(),
        term in word_strategy(),
        max_distance in 1usize..4,
    ) {
        // With an unbounded limit, the result is every in-range word sorted by (distance, word)
        let lexicon = build(&pairs);
        let query = normalize(&term);
        let mut expected: Vec<(usize, &str)> = lexicon
            .words()
            .map(|w| (edit_distance(&query, w), w))
            .filter(|(d, _)| (1..=max_distance).contains(d))
            .collect();
        expected.sort();
        let expected: Vec<&str> = expected.into_iter().map(|(_, w)| w).collect();
        prop_assert_eq!(correct(&lexicon, &term, max_distance, usize::MAX), expected);
    }
}

// ============================================================================
// PREFIX INDEX
// ============================================================================

proptest! {
    #[test]
    fn prop_prefix_index_first_matches_oracle(
        words in prop::collection::hash_set("[a-d]{0,5}", 0..40),
        prefix in "[a-d]{0,3}",
        limit in 0usize..20,
    ) {
        let words: Vec<String> = words.into_iter().collect();
        let index = PrefixIndex::build(&words);
        let expected: Vec<usize> = (0..words.len())
            .filter(|&i| words[i].starts_with(&prefix))
            .take(limit)
            .collect();
        prop_assert_eq!(index.first_matches(&words, &prefix, limit), expected);
    }
}

// ============================================================================
// RECORD PARSING
// ============================================================================

proptest! {
    #[test]
    fn prop_quoted_fields_survive_loading(word in "[a-z]{1,8}", definition in "[a-z ,\"]{0,20}") {
        let csv = lexis::testing::to_csv(&[(&word, &definition)]);
        let (lexicon, stats) = load_reader(csv.as_bytes()).unwrap();
        prop_assert_eq!(stats.entries, 1);

        let trimmed = definition.trim_matches([' ', '\t', '\r', '\n']);
        let unwrapped = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };
        prop_assert_eq!(lexicon.definitions(&word).unwrap(), &[unwrapped.to_string()][..]);
    }
}

#[test]
fn test_escaped_quote_inside_quoted_field() {
    assert_eq!(parse_fields(r#""a,b""c""#), vec![r#"a,b"c"#]);
}
