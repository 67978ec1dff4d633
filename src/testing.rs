//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test builds lexicons the same way.

#![doc(hidden)]

use crate::lexicon::Lexicon;

/// The two-record scenario used throughout the test suite.
pub const ANIMALS_CSV: &str = "cat,\"a small domestic animal\"\n\
                               dog,\"a domesticated carnivorous mammal\"\n";

/// Build a lexicon from (word, definition) pairs.
pub fn make_lexicon(pairs: &[(&str, &str)]) -> Lexicon {
    Lexicon::from_pairs(pairs.iter().copied())
}

/// Quote a value as a dataset field, escaping embedded quotes.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render (word, definition) pairs as dataset lines.
pub fn to_csv(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(word, def)| format!("{},{}\n", quote_field(word), quote_field(def)))
        .collect()
}

/// Deterministic pseudo-dictionary of `n` distinct words for benches.
///
/// Words are built from a small syllable set so that many share prefixes and
/// many sit within a couple of edits of each other, like real vocabulary.
pub fn synthetic_words(n: usize) -> Vec<String> {
    const SYLLABLES: &[&str] = &[
        "ka", "to", "ri", "mo", "sen", "dal", "ve", "lo", "qua", "ne", "bri", "pu",
    ];
    let mut words = Vec::with_capacity(n);
    let mut i = 0usize;
    while words.len() < n {
        let mut x = i;
        let mut word = String::new();
        loop {
            word.push_str(SYLLABLES[x % SYLLABLES.len()]);
            x /= SYLLABLES.len();
            if x == 0 {
                break;
            }
        }
        words.push(word);
        i += 1;
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_synthetic_words_are_distinct() {
        let words = synthetic_words(2_000);
        let unique: HashSet<_> = words.iter().collect();
        assert_eq!(unique.len(), 2_000);
    }

    #[test]
    fn test_to_csv_escapes_quotes() {
        assert_eq!(to_csv(&[("a", "say \"hi\"")]), "\"a\",\"say \"\"hi\"\"\"\n");
    }
}
