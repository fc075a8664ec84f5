//! Text normalization for author comparison
//!
//! Strings are case-folded first, then "noise" (punctuation, non-ASCII
//! letters, runs of whitespace) is collapsed so that two renderings of the
//! same name differ only in the characters that actually carry meaning.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum length of a normalized string fed to the edit distance.
pub const MAX_NORMALIZED_LEN: usize = 255;

lazy_static! {
    static ref NOISE_RUN: Regex = Regex::new(r"(?i)[^a-z0-9]+").unwrap();
    static ref ARTICLE: Regex = Regex::new(r" (the|a) ").unwrap();
}

/// Fold a string to its canonical case-insensitive form.
///
/// - Unicode normalize (NFKD) and drop combining marks, so "é" becomes "e"
/// - Uppercase then lowercase, so "ß" and "SS" both become "ss"
///
/// Letters without a decomposition (e.g. "Ø") are kept here and removed
/// later as noise.
pub fn fold_case(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
        .to_lowercase()
}

/// Remove reference noise from a string.
///
/// Every maximal run of characters outside `[a-z0-9]` becomes a single
/// space, then the first standalone "the" or "a" is dropped. Leading and
/// trailing spaces are kept.
pub fn strip_noise(s: &str) -> String {
    let collapsed = NOISE_RUN.replace_all(s, " ");
    ARTICLE.replace(&collapsed, " ").into_owned()
}

/// Fold, strip and truncate a string for edit-distance comparison.
pub fn normalize_for_comparison(s: &str) -> String {
    let mut normalized = strip_noise(&fold_case(s));
    // ASCII only after stripping, so byte truncation is char truncation
    normalized.truncate(MAX_NORMALIZED_LEN);
    normalized
}
