// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! On a real dictionary most words fail this test for a short query term.
//!
//! Lengths and positions are counted in bytes, so a multi-byte UTF-8 letter costs
//! one edit per byte. For ASCII input that's the same as characters.

/// Levenshtein distance with unit costs for insertion, deletion and substitution.
///
/// The textbook recurrence over a `(len(a)+1) × (len(b)+1)` table:
///
/// ```text
/// table[i][0] = i
/// table[0][j] = j
/// table[i][j] = table[i-1][j-1]                                      if a[i-1] == b[j-1]
///             = 1 + min(table[i-1][j], table[i][j-1], table[i-1][j-1]) otherwise
/// ```
///
/// Only the previous row is ever read, so we keep two rows instead of the whole table.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Edit distance between `a` and `b`, if it is at most `max`.
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If the length difference exceeds `max`, return `None` immediately
/// 2. If every cell in a DP row exceeds `max`, abandon the DP
///
/// Both are sound: row minima never decrease from one row to the next, and the
/// length difference never exceeds the true distance. So `Some(d)` is returned
/// exactly when `edit_distance(a, b) == d && d <= max`.
pub fn edit_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (a_len, b_len) = (a.len(), b.len());

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            dp[j + 1] = if ac == bc {
                prev
            } else {
                1 + dp[j + 1].min(dp[j]).min(prev)
            };
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    Some(dp[b_len]).filter(|&d| d <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_empty_side_is_length() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abcd", ""), 4);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(edit_distance("kat", "cat"), 1); // substitution
        assert_eq!(edit_distance("hell", "hello"), 1); // insertion
        assert_eq!(edit_distance("hello", "helo"), 1); // deletion
    }

    #[test]
    fn test_classic_examples() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("intention", "execution"), 5);
    }

    #[test]
    fn test_transposition_costs_two() {
        assert_eq!(edit_distance("ab", "ba"), 2);
    }

    #[test]
    fn test_counts_bytes_not_chars() {
        // "é" is two bytes: one substitution plus one insertion
        assert_eq!(edit_distance("cafe", "café"), 2);
        assert_eq!(edit_distance("", "é"), 2);
        assert_eq!(edit_distance_within("cafe", "café", 1), None);
        assert_eq!(edit_distance_within("cafe", "café", 2), Some(2));
    }

    #[test]
    fn test_within_matches_exact_distance() {
        assert_eq!(edit_distance_within("kitten", "sitting", 3), Some(3));
        assert_eq!(edit_distance_within("kitten", "sitting", 2), None);
        assert_eq!(edit_distance_within("hello", "hello", 0), Some(0));
        assert_eq!(edit_distance_within("kat", "cat", 2), Some(1));
    }

    #[test]
    fn test_within_early_exit_on_length() {
        // Length difference is 5, so distance must be >= 5
        assert_eq!(edit_distance_within("a", "abcdef", 1), None);
        assert_eq!(edit_distance_within("a", "abcdef", 5), Some(5));
    }

    #[test]
    fn test_within_empty_strings() {
        assert_eq!(edit_distance_within("", "", 0), Some(0));
        assert_eq!(edit_distance_within("", "ab", 2), Some(2));
        assert_eq!(edit_distance_within("", "ab", 1), None);
    }
}
