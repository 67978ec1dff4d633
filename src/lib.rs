//! In-memory lexicon lookup: exact definitions, prefix autocomplete, and
//! edit-distance spelling corrections.
//!
//! A dataset of `word,definition` lines is loaded once into a `Lexicon`, which
//! is then frozen and queried read-only by any number of threads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  build/     │────▶│  lexicon.rs  │────▶│  search.rs   │
//! │ (CSV lines, │     │ (Builder →   │     │ (lookup,     │
//! │  Loader)    │     │  Lexicon)    │     │  suggest,    │
//! └─────────────┘     └──────────────┘     │  correct)    │
//!        │                   │             └──────────────┘
//!        ▼                   ▼                    │
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │     │  index.rs    │     │  fuzzy/      │
//! │ (normalize, │     │ (PrefixIndex)│     │ (edit        │
//! │  trim)      │     │              │     │  distance)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                         server/ (feature "server") ◀┘  HTTP adapter
//! ```
//!
//! # Usage
//!
//! ```
//! use lexis::{correct, load_reader, lookup, suggest};
//!
//! let data = "cat,\"a small domestic animal\"\ndog,\"a domesticated carnivorous mammal\"\n";
//! let (lexicon, stats) = load_reader(data.as_bytes()).unwrap();
//! assert_eq!(stats.entries, 2);
//!
//! assert_eq!(lookup(&lexicon, "CAT").text(), Some("1. a small domestic animal"));
//! assert_eq!(suggest(&lexicon, "ca", 10), vec!["cat"]);
//! assert_eq!(correct(&lexicon, "kat", 2, 5), vec!["cat"]);
//! ```

// Module declarations
pub mod build;
pub mod contracts;
pub mod error;
pub mod fuzzy;
mod index;
mod lexicon;
mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "server")]
pub mod server;

// Re-exports for public API
pub use build::{load_path, load_path_with_progress, load_reader, parse_fields, Record, PROGRESS_INTERVAL};
pub use error::LexiconError;
pub use fuzzy::{edit_distance, edit_distance_within};
pub use index::PrefixIndex;
pub use lexicon::{Lexicon, LexiconBuilder};
pub use search::{correct, lookup, rank_corrections, suggest};
pub use types::{
    Entry, Limit, LoadStats, Lookup, MaxDistance, DEFINITION_SEPARATOR, MAX_DEFINITIONS,
};
pub use utils::{normalize, trim_whitespace};

#[cfg(test)]
mod tests {
    //! Cross-module property tests.

    use super::*;
    use proptest::prelude::*;

    fn word_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z]{1,6}").unwrap()
    }

    fn pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec((word_strategy(), "[ a-z]{0,8}"), 1..30)
    }

    #[test]
    fn end_to_end_scenario() {
        let (lexicon, _) = load_reader(testing::ANIMALS_CSV.as_bytes()).unwrap();
        assert_eq!(lookup(&lexicon, "CAT").text(), Some("1. a small domestic animal"));
        assert_eq!(lookup(&lexicon, "cow"), Lookup::NotFound);
        assert_eq!(suggest(&lexicon, "ca", 10), vec!["cat"]);
        assert_eq!(correct(&lexicon, "kat", 2, 5), vec!["cat"]);
        assert_eq!(lexicon.distinct_word_count(), 2);
        assert_eq!(lexicon.total_entry_count(), 2);
    }

    proptest! {
        #[test]
        fn lookup_ignores_ascii_case(pairs in pairs_strategy()) {
            let lexicon = Lexicon::from_pairs(pairs.iter().map(|(w, d)| (w.as_str(), d.as_str())));
            for (word, _) in &pairs {
                let lower = lookup(&lexicon, &word.to_ascii_lowercase());
                prop_assert_eq!(&lookup(&lexicon, &word.to_ascii_uppercase()), &lower);
                prop_assert_eq!(&lookup(&lexicon, word), &lower);
            }
        }

        #[test]
        fn csv_load_matches_direct_registration(pairs in pairs_strategy()) {
            let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(w, d)| (w.as_str(), d.as_str())).collect();
            let (loaded, stats) = load_reader(testing::to_csv(&borrowed).as_bytes()).unwrap();
            let direct = testing::make_lexicon(&borrowed);

            prop_assert_eq!(stats.entries, pairs.len());
            prop_assert_eq!(loaded.words().collect::<Vec<_>>(), direct.words().collect::<Vec<_>>());
            for (word, _) in &pairs {
                let trimmed: Vec<String> = direct
                    .definitions(word)
                    .unwrap()
                    .iter()
                    .map(|d| trim_whitespace(d).to_string())
                    .collect();
                prop_assert_eq!(loaded.definitions(word).unwrap(), trimmed.as_slice());
            }
        }
    }
}
