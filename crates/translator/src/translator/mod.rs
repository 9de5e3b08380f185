//! Translation strategies behind the [`Translator`] capability surface.

mod dict;
mod regex;
mod sequence;
mod traverse;

use std::mem;
use std::ops::{Add, AddAssign};

pub use dict::TranslatorByDict;
pub use regex::TranslatorByRegex;
pub use sequence::TranslatorBySequence;

use crate::error::ConfigError;
use crate::types::{Candidates, DictKey, Order, Rule};

/// A configured strategy mapping candidate input strings to output
/// strings.
///
/// The variant set is closed: exact lookup, pattern substitution, ordered
/// composition, and two trivial sentinels. A translator is immutable once
/// constructed and matching never touches mutable state, so instances can
/// be shared freely for read-only use.
///
/// Both query operations accept a single string or an ordered list of
/// alternative spellings of the same input (see
/// [`Candidates`](crate::Candidates)):
///
/// ```
/// use translator::Translator;
///
/// let t = Translator::by_regex([(r"data/(\w+)/(\w+)\.txt", r"processed/\1/\2.dat")])?;
/// assert_eq!(
///     t.first("data/2024/observations.txt").as_deref(),
///     Some("processed/2024/observations.dat"),
/// );
/// assert_eq!(t.first("images/x.jpg"), None);
/// # Ok::<(), translator::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub enum Translator {
    /// Exact lookup in a table.
    Dict(TranslatorByDict),
    /// Ordered pattern/template substitution.
    Regex(TranslatorByRegex),
    /// Ordered composition of child translators.
    Sequence(TranslatorBySequence),
    /// Matches nothing; the explicit placeholder where a configuration
    /// slot requires a translator but no translation should occur.
    #[default]
    Null,
    /// Returns every candidate string unchanged.
    Identity,
}

impl Translator {
    /// Exact-lookup translator from key/value pairs.
    pub fn by_dict<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Translator
    where
        K: Into<DictKey>,
        V: Into<String>,
    {
        Translator::Dict(TranslatorByDict::new(pairs))
    }

    /// Pattern-substitution translator from an ordered rule list.
    ///
    /// Fails on malformed configuration; see [`ConfigError`].
    pub fn by_regex<R>(rules: impl IntoIterator<Item = R>) -> Result<Translator, ConfigError>
    where
        R: Into<Rule>,
    {
        Ok(Translator::Regex(TranslatorByRegex::new(rules)?))
    }

    /// Composition of child translators, in priority order.
    pub fn by_sequence(children: impl IntoIterator<Item = Translator>) -> Translator {
        Translator::Sequence(TranslatorBySequence::new(children))
    }

    /// Every translated result for `input`, in priority order, under the
    /// default [`Order::RulesFirst`].
    pub fn all<'a>(&self, input: impl Into<Candidates<'a>>) -> Vec<String> {
        self.all_with(input, Order::RulesFirst)
    }

    /// Every translated result for `input` under an explicit [`Order`].
    ///
    /// Absence of matches is an empty vector, never an error. Results are
    /// unique: a value already produced by a higher-priority attempt is
    /// not repeated.
    pub fn all_with<'a>(&self, input: impl Into<Candidates<'a>>, order: Order) -> Vec<String> {
        let candidates = input.into();
        self.all_inner(candidates.as_slice(), order)
    }

    /// The first translated result for `input` under the default
    /// [`Order::RulesFirst`], or `None` when no configuration element
    /// matches any candidate string.
    pub fn first<'a>(&self, input: impl Into<Candidates<'a>>) -> Option<String> {
        self.first_with(input, Order::RulesFirst)
    }

    /// The first translated result under an explicit [`Order`]; equals
    /// the head of [`all_with`](Self::all_with) for the same arguments.
    pub fn first_with<'a>(&self, input: impl Into<Candidates<'a>>, order: Order) -> Option<String> {
        let candidates = input.into();
        self.first_inner(candidates.as_slice(), order)
    }

    pub(crate) fn all_inner(&self, strings: &[&str], order: Order) -> Vec<String> {
        match self {
            Translator::Dict(dict) => dict.all_inner(strings, order),
            Translator::Regex(regex) => regex.all_inner(strings, order),
            Translator::Sequence(sequence) => sequence.all_inner(strings, order),
            Translator::Null => Vec::new(),
            Translator::Identity => strings.iter().map(ToString::to_string).collect(),
        }
    }

    pub(crate) fn first_inner(&self, strings: &[&str], order: Order) -> Option<String> {
        match self {
            Translator::Dict(dict) => dict.first_inner(strings, order),
            Translator::Regex(regex) => regex.first_inner(strings, order),
            Translator::Sequence(sequence) => sequence.first_inner(strings, order),
            Translator::Null => None,
            Translator::Identity => strings.first().map(ToString::to_string),
        }
    }

    /// Combine two translators, `self` taking priority.
    ///
    /// Flattens where possible: `Null` is the identity element of
    /// composition, two regex translators merge their rule lists, two
    /// sequences merge their children, and appending to a sequence merges
    /// into its last child when the kinds allow. Anything else wraps both
    /// sides in a new two-child sequence.
    pub fn append(self, other: Translator) -> Translator {
        match (self, other) {
            (this, Translator::Null) => this,
            (Translator::Null, other) => other,
            (Translator::Sequence(this), Translator::Sequence(other)) => {
                Translator::Sequence(this.concat(other))
            }
            (Translator::Sequence(this), other) => Translator::Sequence(this.push_back(other)),
            (this, Translator::Sequence(other)) => Translator::Sequence(other.push_front(this)),
            (this, other) => match Translator::try_merge(this, other) {
                Ok(merged) => merged,
                Err((this, other)) => {
                    Translator::Sequence(TranslatorBySequence::new([this, other]))
                }
            },
        }
    }

    /// Combine two translators, `other` taking priority.
    pub fn prepend(self, other: Translator) -> Translator {
        other.append(self)
    }

    /// Merge two translators of the same mergeable kind into one,
    /// returning both unchanged when they cannot merge.
    pub(crate) fn try_merge(
        a: Translator,
        b: Translator,
    ) -> Result<Translator, (Translator, Translator)> {
        match (a, b) {
            (Translator::Regex(a), Translator::Regex(b)) => Ok(Translator::Regex(a.merge(b))),
            (Translator::Identity, Translator::Identity) => Ok(Translator::Identity),
            (a, b) => Err((a, b)),
        }
    }
}

impl Add for Translator {
    type Output = Translator;

    fn add(self, rhs: Translator) -> Translator {
        self.append(rhs)
    }
}

impl AddAssign for Translator {
    fn add_assign(&mut self, rhs: Translator) {
        *self = mem::take(self).append(rhs);
    }
}

impl From<TranslatorByDict> for Translator {
    fn from(dict: TranslatorByDict) -> Self {
        Translator::Dict(dict)
    }
}

impl From<TranslatorByRegex> for Translator {
    fn from(regex: TranslatorByRegex) -> Self {
        Translator::Regex(regex)
    }
}

impl From<TranslatorBySequence> for Translator {
    fn from(sequence: TranslatorBySequence) -> Self {
        Translator::Sequence(sequence)
    }
}
