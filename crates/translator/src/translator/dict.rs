//! Exact-match strategy.

use std::collections::HashMap;

use bon::Builder;

use crate::translator::Translator;
use crate::types::{DictKey, Order};

/// Translator defined by a lookup table. Fast but inflexible.
///
/// Keys are whole candidate strings, or whole ordered tuples of candidate
/// strings; no partial or substring matching is ever performed. The
/// literal substring `\1` in a stored value is replaced by the matched
/// key text.
///
/// An optional `key_translator` maps raw candidate strings to the keys
/// actually used for lookup, so inputs can be normalized (for example,
/// stripping a directory prefix) without duplicating table entries.
#[derive(Debug, Clone, Default, Builder)]
pub struct TranslatorByDict {
    /// The lookup table.
    #[builder(default)]
    map: HashMap<DictKey, String>,

    /// Optional translator deriving the lookup keys from the candidate
    /// strings.
    #[builder(into)]
    key_translator: Option<Box<Translator>>,
}

impl TranslatorByDict {
    /// Build a translator from key/value pairs, with no key translator.
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<DictKey>,
        V: Into<String>,
    {
        TranslatorByDict {
            map: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            key_translator: None,
        }
    }

    /// The keys, sorted.
    pub fn keys(&self) -> Vec<&DictKey> {
        let mut keys: Vec<&DictKey> = self.map.keys().collect();
        keys.sort();
        keys
    }

    /// The values, in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> Vec<&str> {
        self.keys()
            .into_iter()
            .map(|key| self.map[key].as_str())
            .collect()
    }

    pub(crate) fn all_inner(&self, strings: &[&str], order: Order) -> Vec<String> {
        let mut results = Vec::new();
        for (key, value) in self.matches(strings, order) {
            let expanded = expand_value(value, &key);
            if !results.contains(&expanded) {
                results.push(expanded);
            }
        }
        results
    }

    pub(crate) fn first_inner(&self, strings: &[&str], order: Order) -> Option<String> {
        self.matches(strings, order)
            .into_iter()
            .next()
            .map(|(key, value)| expand_value(value, &key))
    }

    /// Every (matched key text, value) pair in lookup order: the whole
    /// tuple of keys first when more than one is present, then each key
    /// alone in declared order.
    ///
    /// `order` cannot affect lookup itself (a lookup is a single direct
    /// attempt per key), but it is forwarded to the key translator.
    fn matches(&self, strings: &[&str], order: Order) -> Vec<(String, &str)> {
        let keys: Vec<String> = match &self.key_translator {
            Some(translator) => translator.all_inner(strings, order),
            None => strings.iter().map(ToString::to_string).collect(),
        };

        let mut found = Vec::new();
        if keys.len() > 1 {
            if let Some(value) = self.map.get(&DictKey::Multi(keys.clone())) {
                found.push((keys.join("/"), value.as_str()));
            }
        }
        for key in keys {
            if let Some(value) = self.map.get(&DictKey::Single(key.clone())) {
                found.push((key, value.as_str()));
            }
        }
        found
    }
}

/// Replace the `\1` back-reference in a stored value with the key text.
fn expand_value(value: &str, key: &str) -> String {
    value.replace(r"\1", key)
}
