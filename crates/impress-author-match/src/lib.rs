//! impress-author-match: decide whether two citations list the same authors.
//!
//! Author strings from different sources rarely agree character for
//! character: initials replace given names, punctuation and case drift,
//! generational suffixes ("3rd") come and go, one source truncates the list.
//! This crate folds those differences away and compares lists position by
//! position, so author order still has to agree.
//!
//! ```
//! use impress_author_match::compare_author_lists;
//!
//! assert!(compare_author_lists(["Light, Richard W."], ["Light, R. W."]));
//! assert!(compare_author_lists("Toomes, H", "Toomes, H."));
//! assert!(!compare_author_lists("Foobarson, Robert A.", "Smith, Baringson"));
//! ```
//!
//! # Pipeline
//!
//! - [`splitter`]: semicolon-delimited strings become ordered lists
//! - [`normalization`]: case folding and noise stripping
//! - [`similarity`]: edit-distance comparison with a tolerance
//! - [`tokenizer`]: one author becomes surname + given-name tokens
//! - [`alignment`]: lockstep walk over both lists

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod alignment;
pub mod config;
pub mod error;
#[cfg(feature = "native")]
pub mod ffi;
pub mod normalization;
pub mod similarity;
pub mod splitter;
pub mod tokenizer;

pub use alignment::{
    align_author_lists, compare_author_lists, compare_author_lists_with, AuthorListMatch,
};
pub use config::{ConfigError, MatchConfig};
pub use error::{MatchError, Result};
pub use splitter::{split_author_string, AuthorInput};
pub use tokenizer::{split_author, NameOrder};
