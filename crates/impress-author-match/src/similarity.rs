//! Fuzzy string comparison over normalized forms

use strsim::levenshtein;

use crate::normalization::normalize_for_comparison;

/// Whole-author comparisons succeed when the distance is strictly below this.
pub const DEFAULT_AUTHOR_DISTANCE: usize = 10;

/// Default inclusive tolerance for individual name tokens.
pub const DEFAULT_TOKEN_TOLERANCE: usize = 3;

/// Levenshtein distance between the normalized forms of two strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(&normalize_for_comparison(a), &normalize_for_comparison(b))
}

/// Fuzzily compare two strings.
///
/// Identical inputs always match. Otherwise both are normalized and their
/// edit distance is checked: with no tolerance the distance must be below
/// [`DEFAULT_AUTHOR_DISTANCE`], with `Some(t)` it must be at most `t`.
pub fn fuzzy_string_compare(a: &str, b: &str, tolerance: Option<usize>) -> bool {
    if a == b {
        return true;
    }

    let distance = edit_distance(a, b);
    match tolerance {
        None => distance < DEFAULT_AUTHOR_DISTANCE,
        Some(tolerance) => distance <= tolerance,
    }
}
