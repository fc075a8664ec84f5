//! Test fixture loading utilities

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

/// A labelled pair of author inputs and the expected verdict
#[derive(Debug, Deserialize)]
pub struct AuthorPairFixture {
    pub name: String,
    pub a: Value,
    pub b: Value,
    pub expected: bool,
}

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load the labelled author-pair fixtures
pub fn load_author_pairs() -> Vec<AuthorPairFixture> {
    serde_json::from_str(&load_fixture("author_pairs.json"))
        .unwrap_or_else(|e| panic!("Invalid author_pairs.json: {}", e))
}
