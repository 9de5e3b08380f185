use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A lookup key of an exact-match translator.
///
/// A key is either one whole candidate string or an ordered tuple of
/// strings, supporting translation keyed on multiple joined input fields.
/// Lookups are exact; no partial or substring matching is ever performed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DictKey {
    /// A single-string key.
    Single(String),
    /// A multi-field key matched against the whole ordered tuple of
    /// candidate strings.
    Multi(Vec<String>),
}

impl DictKey {
    /// Get this key as a single string, if it is one.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            DictKey::Single(s) => Some(s),
            DictKey::Multi(_) => None,
        }
    }
}

impl Display for DictKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DictKey::Single(s) => write!(f, "{s}"),
            DictKey::Multi(fields) => write!(f, "{}", fields.join("/")),
        }
    }
}

// From implementations for common key shapes

impl From<&str> for DictKey {
    fn from(s: &str) -> Self {
        DictKey::Single(s.to_string())
    }
}

impl From<String> for DictKey {
    fn from(s: String) -> Self {
        DictKey::Single(s)
    }
}

impl From<(&str, &str)> for DictKey {
    fn from((a, b): (&str, &str)) -> Self {
        DictKey::Multi(vec![a.to_string(), b.to_string()])
    }
}

impl From<(&str, &str, &str)> for DictKey {
    fn from((a, b, c): (&str, &str, &str)) -> Self {
        DictKey::Multi(vec![a.to_string(), b.to_string(), c.to_string()])
    }
}

impl From<Vec<String>> for DictKey {
    fn from(fields: Vec<String>) -> Self {
        DictKey::Multi(fields)
    }
}

impl From<&[&str]> for DictKey {
    fn from(fields: &[&str]) -> Self {
        DictKey::Multi(fields.iter().map(ToString::to_string).collect())
    }
}
