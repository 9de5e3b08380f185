//! Configuration error types.

use strsim::levenshtein;
use thiserror::Error;

use crate::template::TemplateError;

/// An error detected while constructing a translator.
///
/// All configuration problems are raised eagerly at construction; a built
/// translator never fails at match time. `index` is the zero-based position
/// of the offending rule in the rule list.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rule's pattern is not a valid regular expression.
    #[error("rule {index}: invalid pattern `{pattern}`: {source}")]
    Pattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The rule's replacement template could not be parsed.
    #[error("rule {index}: {source}")]
    Template {
        index: usize,
        #[source]
        source: TemplateError,
    },

    /// The template references a capture group index the pattern does not
    /// define.
    #[error(
        "rule {index}: template references group {group} but the pattern \
         only has {available} capture group(s)"
    )]
    GroupIndex {
        index: usize,
        group: usize,
        available: usize,
    },

    /// The template references a capture group name the pattern does not
    /// define.
    #[error(
        "rule {index}: template references unknown group `{name}`{}",
        suggestion.as_ref().map(|s| format!(", did you mean `{s}`?")).unwrap_or_default()
    )]
    GroupName {
        index: usize,
        name: String,
        suggestion: Option<String>,
    },
}

/// Find the closest name to `name` among `available`, if any is close
/// enough to look like a typo.
pub(crate) fn closest<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist > 0 && dist <= max_distance).then_some((dist, candidate))
        })
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, candidate)| candidate.to_string())
}
