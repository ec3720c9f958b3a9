//! Tokenizer
//!
//! Splits text into maximal runs of lowercase ASCII letters and digits.
//! Any other character, including non-ASCII letters, acts as a separator.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_PATTERN: Regex = Regex::new(r"[a-z0-9]+").expect("static token pattern");
}

/// Tokenize `text` into lowercase alphanumeric tokens, left to right.
///
/// Never fails: empty, whitespace-only and punctuation-only input all give
/// an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    TOKEN_PATTERN
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}
