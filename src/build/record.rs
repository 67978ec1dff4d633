// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quote-aware record parsing for the dataset format.
//!
//! One record per line, fields separated by `,`. A field may be wrapped in
//! double quotes, inside which a comma is content and `""` is a literal quote.
//! The parser is forgiving: a quote anywhere toggles quoted mode,
//! an unterminated quote swallows the rest of the line, and nothing is ever
//! rejected. Garbage in, best-effort fields out.
//!
//! ```text
//! cat,"a small, domestic animal"      → ["cat", "a small, domestic animal"]
//! "a,b""c"                            → ["a,b\"c"]
//! word                                → ["word"]
//! ,orphan                             → ["", "orphan"]
//! ```

use crate::utils::trim_whitespace;

/// Split one line into its fields, unescaping quotes.
///
/// Always returns at least one field (possibly empty).
pub fn parse_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// A parsed (word, definition) pair, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub word: String,
    pub definition: String,
}

impl Record {
    /// Parse a dataset line into a record.
    ///
    /// Field 0 is the word, field 1 (optional) the definition; extra fields are
    /// ignored. A definition still wrapped in quotes after unescaping (e.g. from
    /// `"""text"""`) loses exactly one outer pair. Returns `None` when the
    /// trimmed word is empty, which covers blank lines too.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = parse_fields(line).into_iter();
        let word = fields.next().map(|w| trim_whitespace(&w).to_string())?;
        if word.is_empty() {
            return None;
        }

        let definition = fields
            .next()
            .map(|d| strip_redundant_quotes(trim_whitespace(&d)).to_string())
            .unwrap_or_default();

        Some(Record { word, definition })
    }
}

/// Remove one enclosing pair of double quotes, if present.
fn strip_redundant_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
