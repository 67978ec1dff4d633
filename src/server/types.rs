//! Wire types for the HTTP adapter.
//!
//! These mirror what the browser dictionary UI already consumes: a `found` flag
//! with either the numbered definition text or a list of corrections, and bare
//! JSON arrays for suggestions and corrections.

use serde::{Deserialize, Serialize};

use crate::types::Lookup;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub prefix: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CorrectParams {
    #[serde(default)]
    pub word: String,
    pub max_distance: Option<i64>,
    pub limit: Option<i64>,
}

/// Response for `/api/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrections: Option<Vec<String>>,
}

impl SearchResponse {
    /// Found: echo the word as the client sent it.
    pub fn found(word: String, text: String, definitions: Vec<String>) -> Self {
        Self {
            found: true,
            word: Some(word),
            definition: Some(text),
            definitions: Some(definitions),
            corrections: None,
        }
    }

    pub fn not_found(corrections: Vec<String>) -> Self {
        Self {
            found: false,
            word: None,
            definition: None,
            definitions: None,
            corrections: Some(corrections),
        }
    }

    /// Build from a lookup; `corrections` is only consulted on a miss.
    pub fn from_lookup(word: String, lookup: Lookup, corrections: impl FnOnce() -> Vec<String>) -> Self {
        match lookup {
            Lookup::Found { text, definitions } => Self::found(word, text, definitions),
            Lookup::NotFound => Self::not_found(corrections()),
        }
    }
}

/// Response for `/api/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Distinct words.
    pub words: usize,
    /// (word, definition) pairs, duplicates included.
    pub entries: usize,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
