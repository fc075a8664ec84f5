//! Positional author-list alignment
//!
//! Two lists are walked in lockstep. Each pair of entries must match either
//! as whole strings or token by token; the first pair that does neither
//! rejects the whole comparison. Author order therefore has to agree, and
//! authors beyond the shorter list are not compared.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::MatchConfig;
use crate::similarity::fuzzy_string_compare;
use crate::splitter::AuthorInput;
use crate::tokenizer::split_author;

/// Outcome of aligning two author lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct AuthorListMatch {
    /// Whether the lists are judged to be the same authors
    pub is_match: bool,
    /// Number of positions accepted before the walk stopped
    pub compared: u32,
    /// Position of the first rejected author pair, if any
    pub mismatch_at: Option<u32>,
    /// Human-readable explanation
    pub reason: String,
}

/// Compare two author lists with the default configuration.
///
/// Each side may be a semicolon-delimited string or an already-split list.
pub fn compare_author_lists(a: impl Into<AuthorInput>, b: impl Into<AuthorInput>) -> bool {
    align_author_lists(a, b, &MatchConfig::default()).is_match
}

/// Compare two author lists with an explicit configuration.
pub fn compare_author_lists_with(
    a: impl Into<AuthorInput>,
    b: impl Into<AuthorInput>,
    config: &MatchConfig,
) -> bool {
    align_author_lists(a, b, config).is_match
}

/// Align two author lists and report where, if anywhere, they diverge.
pub fn align_author_lists(
    a: impl Into<AuthorInput>,
    b: impl Into<AuthorInput>,
    config: &MatchConfig,
) -> AuthorListMatch {
    let a = a.into().into_authors();
    let b = b.into().into_authors();
    align_internal(&a, &b, config)
}

pub(crate) fn align_internal(a: &[String], b: &[String], config: &MatchConfig) -> AuthorListMatch {
    let author_limit = a.len().min(b.len());
    let mut a_pos = 0;
    let mut b_pos = 0;
    let mut failed = false;

    while a_pos < author_limit && b_pos < author_limit {
        let author_a = &a[a_pos];
        let author_b = &b[b_pos];

        if fuzzy_string_compare(author_a, author_b, config.author_tolerance()) {
            trace!(position = a_pos, "whole-author match: {:?} ~ {:?}", author_a, author_b);
        } else if authors_match_by_token(author_a, author_b, config) {
            trace!(position = a_pos, "token match: {:?} ~ {:?}", author_a, author_b);
        } else {
            debug!(position = a_pos, "author mismatch: {:?} vs {:?}", author_a, author_b);
            failed = true;
            break;
        }

        a_pos += 1;
        b_pos += 1;
    }

    let compared = a_pos as u32;
    if failed {
        AuthorListMatch {
            is_match: false,
            compared,
            mismatch_at: Some(compared),
            reason: format!(
                "Author {} differs: {:?} vs {:?}",
                a_pos + 1,
                a[a_pos],
                b[b_pos]
            ),
        }
    } else {
        AuthorListMatch {
            is_match: true,
            compared,
            mismatch_at: None,
            reason: if compared == 0 {
                "No authors to compare".to_string()
            } else {
                let unpaired = a.len().max(b.len()) - a.len().min(b.len());
                format!("{} compared, {} unpaired", compared, unpaired)
            },
        }
    }
}

/// Token-level fallback: every token pair up to the shorter name must match.
fn authors_match_by_token(author_a: &str, author_b: &str, config: &MatchConfig) -> bool {
    let tokens_a = split_author(author_a, config.name_order);
    let tokens_b = split_author(author_b, config.name_order);
    let name_limit = tokens_a.len().min(tokens_b.len());

    let name_matches = tokens_a
        .iter()
        .zip(&tokens_b)
        .filter(|(token_a, token_b)| tokens_match(token_a, token_b, config.token_tolerance()))
        .count();

    trace!(name_matches, name_limit, "token comparison");
    name_matches >= name_limit
}

fn tokens_match(token_a: &str, token_b: &str, tolerance: usize) -> bool {
    if token_a == token_b {
        return true;
    }

    let len_a = token_a.chars().count();
    let len_b = token_b.chars().count();

    // An initial matches a full name sharing its first letter
    if len_a == 1 {
        return token_b.chars().next() == token_a.chars().next();
    }
    if len_b == 1 {
        return token_a.chars().next() == token_b.chars().next();
    }

    fuzzy_string_compare(token_a, token_b, Some(tolerance))
}
