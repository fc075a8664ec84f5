//! Author list splitting and the "string or list" input model

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MatchError, Result};

lazy_static! {
    static ref AUTHOR_SEPARATOR: Regex = Regex::new(r"\s*;\s*").unwrap();
}

/// Split a semicolon-delimited author string into individual authors.
///
/// Whitespace around each semicolon is consumed. Order is preserved and no
/// other cleanup happens, so `""` yields a single empty author.
pub fn split_author_string(authors: &str) -> Vec<String> {
    AUTHOR_SEPARATOR
        .split(authors)
        .map(str::to_string)
        .collect()
}

/// An author collection as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorInput {
    /// A single delimited string, e.g. `"Smith, J; Doe, J"`
    Raw(String),
    /// Authors already split, in rank order
    List(Vec<String>),
}

impl AuthorInput {
    /// Normalize to an ordered list of raw author strings.
    pub fn into_authors(self) -> Vec<String> {
        match self {
            AuthorInput::Raw(raw) => split_author_string(&raw),
            AuthorInput::List(list) => list,
        }
    }

    /// Build an input from a JSON string or array of strings.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(raw) => Ok(AuthorInput::Raw(raw.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(author) => Ok(author.clone()),
                    other => Err(MatchError::InvalidInput(format!(
                        "array element of type {}",
                        json_type_name(other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(AuthorInput::List),
            other => Err(MatchError::InvalidInput(json_type_name(other).to_string())),
        }
    }

    /// Parse an input from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for AuthorInput {
    fn from(raw: &str) -> Self {
        AuthorInput::Raw(raw.to_string())
    }
}

impl From<String> for AuthorInput {
    fn from(raw: String) -> Self {
        AuthorInput::Raw(raw)
    }
}

impl From<&String> for AuthorInput {
    fn from(raw: &String) -> Self {
        AuthorInput::Raw(raw.clone())
    }
}

impl From<Vec<String>> for AuthorInput {
    fn from(list: Vec<String>) -> Self {
        AuthorInput::List(list)
    }
}

impl From<Vec<&str>> for AuthorInput {
    fn from(list: Vec<&str>) -> Self {
        AuthorInput::List(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AuthorInput {
    fn from(list: &[&str]) -> Self {
        AuthorInput::List(list.iter().map(|author| author.to_string()).collect())
    }
}

impl From<&[String]> for AuthorInput {
    fn from(list: &[String]) -> Self {
        AuthorInput::List(list.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for AuthorInput {
    fn from(list: [&str; N]) -> Self {
        AuthorInput::List(list.iter().map(|author| author.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_author_string() {
        assert_eq!(
            split_author_string("Brynitz, S; Friis-Moller, A."),
            vec!["Brynitz, S", "Friis-Moller, A."]
        );
        assert_eq!(
            split_author_string("Hulzebos, E. H. J;Helders, P. J.  ;  Favie, N. J."),
            vec!["Hulzebos, E. H. J", "Helders, P. J.", "Favie, N. J."]
        );
    }

    #[test]
    fn test_split_single_and_empty() {
        assert_eq!(split_author_string("Toomes, H"), vec!["Toomes, H"]);
        assert_eq!(split_author_string(""), vec![""]);
    }

    #[test]
    fn test_list_passes_through() {
        let input = AuthorInput::from(vec!["Smith; J", "Doe, J"]);
        assert_eq!(input.into_authors(), vec!["Smith; J", "Doe, J"]);
    }

    #[test]
    fn test_raw_is_split() {
        let input = AuthorInput::from("Smith, J; Doe, J");
        assert_eq!(input.into_authors(), vec!["Smith, J", "Doe, J"]);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(
            AuthorInput::from_json(&json!("Smith, J")).unwrap(),
            AuthorInput::Raw("Smith, J".to_string())
        );
        assert_eq!(
            AuthorInput::from_json(&json!(["Smith, J", "Doe, J"])).unwrap(),
            AuthorInput::List(vec!["Smith, J".to_string(), "Doe, J".to_string()])
        );
    }

    #[test]
    fn test_from_json_rejects_other_types() {
        assert!(matches!(
            AuthorInput::from_json(&json!(42)),
            Err(MatchError::InvalidInput(_))
        ));
        assert!(matches!(
            AuthorInput::from_json(&json!({"author": "Smith"})),
            Err(MatchError::InvalidInput(_))
        ));
        let err = AuthorInput::from_json(&json!(["Smith, J", 7])).unwrap_err();
        assert!(err.to_string().contains("array element of type number"));
    }

    #[test]
    fn test_from_json_str() {
        assert!(matches!(
            AuthorInput::from_json_str("not json"),
            Err(MatchError::Json(_))
        ));
        assert_eq!(
            AuthorInput::from_json_str(r#"["A, B"]"#).unwrap().into_authors(),
            vec!["A, B"]
        );
    }

    #[test]
    fn test_serde_untagged() {
        let raw: AuthorInput = serde_json::from_str(r#""Smith, J""#).unwrap();
        assert_eq!(raw, AuthorInput::Raw("Smith, J".to_string()));
        let list: AuthorInput = serde_json::from_str(r#"["Smith, J"]"#).unwrap();
        assert_eq!(list, AuthorInput::List(vec!["Smith, J".to_string()]));
    }
}
