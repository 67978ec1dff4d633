// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading and querying a lexicon.
//!
//! Only two things can go wrong. The dataset can't be read (fatal at startup),
//! or a caller hands us a parameter that has no meaning (negative edit distance).
//! A query miss is not an error; it's `Lookup::NotFound`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    /// The dataset could not be opened or read.
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A correction query asked for a negative edit distance.
    #[error("max distance must be non-negative, got {0}")]
    NegativeMaxDistance(i64),
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LexiconError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for caller mistakes (bad parameters) as opposed to I/O failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LexiconError::NegativeMaxDistance(_))
    }
}

pub type Result<T> = std::result::Result<T, LexiconError>;
