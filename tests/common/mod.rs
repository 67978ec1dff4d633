//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use lexis::{load_path, Lexicon, LoadStats};
use tempfile::NamedTempFile;

// Re-export canonical fixtures from lexis::testing
pub use lexis::testing::{make_lexicon, to_csv, ANIMALS_CSV};

// ============================================================================
// DATASET FILES
// ============================================================================

/// A small dictionary with duplicate headwords, mixed case, quoting quirks,
/// and lines the loader must skip.
pub const SAMPLE_DATASET: &str = "\
apple,\"a round fruit\"\n\
Apple,\"a technology company\"\n\
APPLE,\"the tree bearing apples\"\n\
apple,\"the apple of one's eye\"\n\
apple,\"a fifth definition that is never shown\"\n\
application,\"a formal request\"\n\
apply,\"to make a formal request\"\n\
\n\
banana,\"a long curved fruit\"\n\
band,\"a group of musicians\"\n\
bandana,\"a large handkerchief\"\n\
,\"definition without a word\"\n\
cherry,\"a small, round, red fruit\"\n\
quote,\"\"\"to repeat words\"\"\"\n\
   \n\
grape,a small fruit growing in clusters\r\n";

/// Write `contents` to a fresh temporary file.
pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp dataset");
    file.write_all(contents.as_bytes()).expect("write temp dataset");
    file.flush().expect("flush temp dataset");
    file
}

/// Load `contents` through a real file on disk.
pub fn load_dataset(contents: &str) -> (Lexicon, LoadStats) {
    let file = write_dataset(contents);
    load_path(file.path()).expect("load temp dataset")
}

/// The sample dataset, loaded.
pub fn sample_lexicon() -> Lexicon {
    load_dataset(SAMPLE_DATASET).0
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Every invariant a ranked correction list must satisfy.
pub fn assert_corrections_well_formed(lexicon: &Lexicon, term: &str, max_distance: usize, limit: usize, result: &[String]) {
    let query = lexis::normalize(term);
    assert!(result.len() <= limit, "{} corrections exceed limit {}", result.len(), limit);

    let mut previous: Option<(usize, &str)> = None;
    for word in result {
        assert!(lexicon.contains(word), "correction {:?} is not in the lexicon", word);
        let distance = lexis::edit_distance(&query, word);
        assert!(
            (1..=max_distance).contains(&distance),
            "correction {:?} at distance {} outside 1..={}",
            word,
            distance,
            max_distance
        );
        let key = (distance, word.as_str());
        if let Some(prev) = previous {
            assert!(prev < key, "corrections out of order: {:?} then {:?}", prev, key);
        }
        previous = Some(key);
    }
}
