// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dataset loading: CSV lines in, frozen lexicon out.
//!
//! The loader is the only writer the lexicon ever has. It streams the source
//! line by line, hands each usable record to a `LexiconBuilder`, and freezes the
//! builder once the source is exhausted. Bad lines are skipped and counted; only
//! an unreadable source fails the load.
//!
//! Progress is reported every `PROGRESS_INTERVAL` accepted records, both as an
//! `info!` event and through an optional callback (the CLI drives a spinner with it).

pub mod record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LexiconError, Result};
use crate::lexicon::{Lexicon, LexiconBuilder};
use crate::types::LoadStats;
use crate::utils::is_blank;

pub use record::{parse_fields, Record};

/// Accepted records between progress notifications.
pub const PROGRESS_INTERVAL: usize = 50_000;

/// Load a dataset file.
pub fn load_path(path: impl AsRef<Path>) -> Result<(Lexicon, LoadStats)> {
    load_path_with_progress(path, |_| {})
}

/// Load a dataset file, calling `on_progress(accepted)` every `PROGRESS_INTERVAL` records.
pub fn load_path_with_progress<F>(path: impl AsRef<Path>, on_progress: F) -> Result<(Lexicon, LoadStats)>
where
    F: FnMut(usize),
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LexiconError::io(path, e))?;
    tracing::info!(path = %path.display(), "loading dataset");
    Loader::new(on_progress)
        .load(BufReader::new(file))
        .map_err(|e| LexiconError::io(path, e))
}

/// Load a dataset from any buffered reader.
pub fn load_reader<R: BufRead>(reader: R) -> Result<(Lexicon, LoadStats)> {
    Loader::new(|_| {})
        .load(reader)
        .map_err(|e| LexiconError::io("<reader>", e))
}

/// Streaming loader state.
struct Loader<F> {
    builder: LexiconBuilder,
    stats: LoadStats,
    on_progress: F,
}

impl<F: FnMut(usize)> Loader<F> {
    fn new(on_progress: F) -> Self {
        Self {
            builder: LexiconBuilder::new(),
            stats: LoadStats::default(),
            on_progress,
        }
    }

    fn load<R: BufRead>(mut self, mut reader: R) -> std::io::Result<(Lexicon, LoadStats)> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Lossy: one bad byte shouldn't cost the whole record, let alone the load
            let line = String::from_utf8_lossy(&buf);
            self.ingest_line(line.trim_end_matches(['\n', '\r']));
        }

        self.stats.distinct_words = self.builder.distinct_word_count();
        tracing::info!(
            entries = self.stats.entries,
            distinct_words = self.stats.distinct_words,
            lines = self.stats.lines,
            skipped = self.stats.skipped_records,
            "dataset loaded"
        );
        Ok((self.builder.build(), self.stats))
    }

    fn ingest_line(&mut self, line: &str) {
        self.stats.lines += 1;

        if is_blank(line) {
            self.stats.blank_lines += 1;
            return;
        }

        let Some(record) = Record::from_line(line) else {
            self.stats.skipped_records += 1;
            tracing::debug!(line = self.stats.lines, "skipping record with empty word");
            return;
        };

        self.builder.register(&record.word, record.definition);
        self.stats.entries += 1;

        if self.stats.entries % PROGRESS_INTERVAL == 0 {
            tracing::info!(entries = self.stats.entries, "loading...");
            (self.on_progress)(self.stats.entries);
        }
    }
}
