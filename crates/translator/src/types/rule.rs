use bon::Builder;
use serde::{Deserialize, Serialize};

/// One pattern/template pair of a pattern-substitution translator.
///
/// The pattern is matched against the whole candidate string (it is
/// implicitly anchored at both ends). The template may reference the
/// pattern's capture groups; see [`crate::template`] for its syntax.
///
/// # Example
///
/// ```
/// use translator::Rule;
///
/// let rule = Rule::builder()
///     .pattern(r"(\w+)\.txt")
///     .template(r"\1.dat")
///     .build();
/// assert!(!rule.case_insensitive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct Rule {
    /// Regular expression tested against the whole candidate string.
    #[builder(into)]
    pub pattern: String,

    /// Replacement template expanded with the pattern's capture groups.
    #[builder(into)]
    pub template: String,

    /// Compile the pattern case-insensitively.
    #[serde(default)]
    #[builder(default)]
    pub case_insensitive: bool,
}

impl From<(&str, &str)> for Rule {
    fn from((pattern, template): (&str, &str)) -> Self {
        Rule {
            pattern: pattern.to_string(),
            template: template.to_string(),
            case_insensitive: false,
        }
    }
}

impl From<(String, String)> for Rule {
    fn from((pattern, template): (String, String)) -> Self {
        Rule {
            pattern,
            template,
            case_insensitive: false,
        }
    }
}
