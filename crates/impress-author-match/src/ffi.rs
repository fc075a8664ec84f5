//! UniFFI exports
//!
//! Foreign callers cannot pass the `AuthorInput` union, so each input form
//! gets its own entry point.

use crate::alignment::{align_author_lists, compare_author_lists, compare_author_lists_with};
use crate::{AuthorListMatch, MatchConfig};

/// Compare two semicolon-delimited author strings.
#[uniffi::export]
pub fn compare_author_strings(a: String, b: String) -> bool {
    compare_author_lists(a, b)
}

/// Compare two already-split author lists.
#[uniffi::export]
pub fn compare_author_vecs(a: Vec<String>, b: Vec<String>) -> bool {
    compare_author_lists(a, b)
}

/// Compare two already-split author lists with custom settings.
#[uniffi::export]
pub fn compare_author_vecs_with_config(
    a: Vec<String>,
    b: Vec<String>,
    config: MatchConfig,
) -> bool {
    compare_author_lists_with(a, b, &config)
}

/// Align two already-split author lists and explain the outcome.
#[uniffi::export]
pub fn align_author_vecs(a: Vec<String>, b: Vec<String>, config: MatchConfig) -> AuthorListMatch {
    align_author_lists(a, b, &config)
}
