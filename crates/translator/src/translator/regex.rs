//! Pattern-substitution strategy.

use regex::{Regex, RegexBuilder};

use crate::error::{self, ConfigError};
use crate::template::{self, Segment, Template};
use crate::translator::traverse;
use crate::types::{Order, Rule};

/// Translator defined by an ordered list of pattern/template rules.
///
/// Patterns are compiled once at construction with full-match anchoring:
/// a rule matches only when its pattern covers the whole candidate
/// string, keeping translation of path-like identifiers deterministic.
/// Rule order is priority order; earlier rules are tried first.
#[derive(Debug, Clone)]
pub struct TranslatorByRegex {
    rules: Vec<CompiledRule>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: Rule,
    regex: Regex,
    template: Template,
}

impl TranslatorByRegex {
    /// Compile a list of rules.
    ///
    /// Accepts anything convertible into [`Rule`], most commonly
    /// `(pattern, template)` pairs:
    ///
    /// ```
    /// use translator::TranslatorByRegex;
    ///
    /// let t = TranslatorByRegex::new([(r"data/(\w+)\.txt", r"processed/\1.dat")])?;
    /// assert_eq!(t.patterns().count(), 1);
    /// # Ok::<(), translator::ConfigError>(())
    /// ```
    ///
    /// Fails eagerly on an invalid pattern, a malformed template, or a
    /// template referencing a capture group the pattern does not define.
    pub fn new<R>(rules: impl IntoIterator<Item = R>) -> Result<Self, ConfigError>
    where
        R: Into<Rule>,
    {
        let mut compiled = Vec::new();
        for (index, rule) in rules.into_iter().enumerate() {
            compiled.push(CompiledRule::compile(index, rule.into())?);
        }
        Ok(TranslatorByRegex { rules: compiled })
    }

    /// The rule patterns, in priority order, as originally written
    /// (without the implicit anchors).
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|compiled| compiled.rule.pattern.as_str())
    }

    /// The rule templates, in the same order as
    /// [`patterns`](Self::patterns).
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|compiled| compiled.rule.template.as_str())
    }

    /// Concatenate two compiled rule lists, `self` first.
    pub(crate) fn merge(mut self, other: TranslatorByRegex) -> TranslatorByRegex {
        self.rules.extend(other.rules);
        self
    }

    pub(crate) fn all_inner(&self, strings: &[&str], order: Order) -> Vec<String> {
        traverse::collect_all(&self.rules, strings, order, |rule, string| {
            rule.attempt(string).into_iter().collect()
        })
    }

    pub(crate) fn first_inner(&self, strings: &[&str], order: Order) -> Option<String> {
        traverse::find_first(&self.rules, strings, order, |rule, string| {
            rule.attempt(string)
        })
    }
}

impl CompiledRule {
    fn compile(index: usize, rule: Rule) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(&format!("^(?:{})$", rule.pattern))
            .case_insensitive(rule.case_insensitive)
            .build()
            .map_err(|source| ConfigError::Pattern {
                index,
                pattern: rule.pattern.clone(),
                source,
            })?;
        let template = template::parse_template(&rule.template)
            .map_err(|source| ConfigError::Template { index, source })?;
        validate_groups(index, &template, &regex)?;
        Ok(CompiledRule {
            rule,
            regex,
            template,
        })
    }

    /// One (rule, string) attempt: zero or one result.
    fn attempt(&self, string: &str) -> Option<String> {
        self.regex
            .captures(string)
            .map(|caps| self.template.expand(&caps))
    }
}

/// Check every group reference in `template` against the compiled
/// pattern, so a dangling back-reference fails at construction instead of
/// corrupting output at match time.
fn validate_groups(index: usize, template: &Template, regex: &Regex) -> Result<(), ConfigError> {
    let group_count = regex.captures_len(); // includes the whole match
    let names: Vec<&str> = regex.capture_names().flatten().collect();
    for segment in &template.segments {
        match segment {
            Segment::Group(group) if *group >= group_count => {
                return Err(ConfigError::GroupIndex {
                    index,
                    group: *group,
                    available: group_count - 1,
                });
            }
            Segment::NamedGroup(name) if !names.contains(&name.as_str()) => {
                return Err(ConfigError::GroupName {
                    index,
                    name: name.clone(),
                    suggestion: error::closest(name, names.iter().copied()),
                });
            }
            _ => {}
        }
    }
    Ok(())
}
