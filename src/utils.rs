//! Utility functions for string processing.

/// Normalize a term for lookup: ASCII lowercase, nothing else.
///
/// Every key that enters the lexicon and every query term goes through this,
/// so lookups are case-insensitive by construction. Non-ASCII bytes pass through
/// untouched (no Unicode case folding):
/// - "Cat" → "cat"
/// - "CAFÉ" → "cafÉ"
/// - "" → ""
pub fn normalize(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Whitespace recognized by [`trim_whitespace`].
const TRIM_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Strip leading and trailing spaces, tabs, carriage returns and newlines.
///
/// Narrower than `str::trim`: other Unicode whitespace (NBSP, etc.) is content.
/// Dataset fields and stored definitions are trimmed with this.
pub fn trim_whitespace(value: &str) -> &str {
    value.trim_matches(&TRIM_CHARS[..])
}

/// Is this line empty once trimmed?
pub fn is_blank(value: &str) -> bool {
    trim_whitespace(value).is_empty()
}
