//! Author name tokenization
//!
//! Splits a single author string ("Light, Richard W.") into case-folded name
//! components (`["light", "richard", "w"]`). Generational markers such as
//! "3rd" are dropped so they never take part in matching.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalization::fold_case;

lazy_static! {
    static ref TOKEN_SEPARATOR: Regex = Regex::new(r"[\s,.]+").unwrap();
    static ref DESCENDANT_NUMERIC: Regex = Regex::new(r"^\d+(st|nd|rd|th)$").unwrap();
}

/// How author names are ordered in the source strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum NameOrder {
    /// "Smith, John" / "Smith J": surname always comes first
    #[default]
    LastFirst,
    /// Also accept "John Smith" when no comma is present
    FirstLast,
}

/// Check whether a token is an ordinal-descendant marker ("1st", "23rd").
pub fn is_descendant_numeric(token: &str) -> bool {
    DESCENDANT_NUMERIC.is_match(&token.to_lowercase())
}

/// Split an author string into its name tokens, surname first.
///
/// Commas, periods and whitespace all separate tokens. Empty fragments and
/// descendant markers are discarded. With [`NameOrder::FirstLast`] a
/// comma-free name has its final token moved to the front.
pub fn split_author(author: &str, order: NameOrder) -> Vec<String> {
    let folded = fold_case(author);
    let mut tokens: Vec<String> = TOKEN_SEPARATOR
        .split(&folded)
        .filter(|fragment| !fragment.is_empty())
        .filter(|fragment| !is_descendant_numeric(fragment))
        .map(str::to_string)
        .collect();

    if order == NameOrder::FirstLast && !author.contains(',') && tokens.len() > 1 {
        tokens.rotate_right(1);
    }

    tokens
}
