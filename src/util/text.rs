// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token normalization.
//!
//! Documents and queries must go through the same pipeline, or TF-IDF weights
//! stop lining up: a token is whatever sits between whitespace, and its index
//! key is the normalized (lowercased, optionally diacritic-stripped) form.
//! The original spelling is kept alongside so result display can show the
//! text as written.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// A whitespace-delimited token: original spelling plus its index key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token as it appears in the source text.
    pub raw: String,
    /// The normalized form used as the indexing key.
    pub key: String,
}

/// Normalize a token for indexing: lowercase and strip diacritics.
///
/// This enables matching between ASCII and accented spellings:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    // Unicode category Mn (Mark, Nonspacing) range
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{0C00}'..='\u{0C7F}' |  // Telugu (some combining marks)
        '\u{0900}'..='\u{097F}' |  // Devanagari (some combining marks)
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split text on whitespace into tokens.
///
/// Tokens whose normalized form is empty (all combining marks) carry no
/// index key and are dropped.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let key = normalize(raw);
            if key.is_empty() {
                None
            } else {
                Some(Token {
                    raw: raw.to_string(),
                    key,
                })
            }
        })
        .collect()
}
