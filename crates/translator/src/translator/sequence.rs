//! Sequence-composition strategy.

use std::slice;

use crate::translator::{Translator, traverse};
use crate::types::Order;

/// Translator defined by an ordered list of child translators.
///
/// Earlier children take priority. A child's own internal ordering is
/// opaque to the parent: the sequence orders only across children, or
/// across candidate strings under [`Order::StringsFirst`]. Under the
/// default [`Order::RulesFirst`] each child receives the whole candidate
/// list in one delegated call.
#[derive(Debug, Clone, Default)]
pub struct TranslatorBySequence {
    children: Vec<Translator>,
}

impl TranslatorBySequence {
    /// Build a sequence from child translators, in priority order.
    pub fn new(children: impl IntoIterator<Item = Translator>) -> Self {
        TranslatorBySequence {
            children: children.into_iter().collect(),
        }
    }

    /// The child translators, in priority order.
    pub fn children(&self) -> &[Translator] {
        &self.children
    }

    pub(crate) fn all_inner(&self, strings: &[&str], order: Order) -> Vec<String> {
        match order {
            Order::RulesFirst => traverse::collect_all(
                &self.children,
                slice::from_ref(&strings),
                order,
                |child, group| child.all_inner(group, order),
            ),
            Order::StringsFirst => traverse::collect_all(
                &self.children,
                strings,
                order,
                |child, string| child.all_inner(slice::from_ref(string), order),
            ),
        }
    }

    pub(crate) fn first_inner(&self, strings: &[&str], order: Order) -> Option<String> {
        match order {
            Order::RulesFirst => traverse::find_first(
                &self.children,
                slice::from_ref(&strings),
                order,
                |child, group| child.first_inner(group, order),
            ),
            Order::StringsFirst => traverse::find_first(
                &self.children,
                strings,
                order,
                |child, string| child.first_inner(slice::from_ref(string), order),
            ),
        }
    }

    /// Append `translator` as the lowest-priority child, merging it into
    /// the current last child when the kinds allow.
    pub(crate) fn push_back(mut self, translator: Translator) -> TranslatorBySequence {
        match self.children.pop() {
            Some(last) => match Translator::try_merge(last, translator) {
                Ok(merged) => self.children.push(merged),
                Err((last, translator)) => {
                    self.children.push(last);
                    self.children.push(translator);
                }
            },
            None => self.children.push(translator),
        }
        self
    }

    /// Insert `translator` as the highest-priority child, merging it into
    /// the current first child when the kinds allow.
    pub(crate) fn push_front(mut self, translator: Translator) -> TranslatorBySequence {
        if self.children.is_empty() {
            self.children.push(translator);
            return self;
        }
        let first = self.children.remove(0);
        match Translator::try_merge(translator, first) {
            Ok(merged) => self.children.insert(0, merged),
            Err((translator, first)) => {
                self.children.insert(0, first);
                self.children.insert(0, translator);
            }
        }
        self
    }

    /// Concatenate two sequences, `self`'s children first.
    pub(crate) fn concat(mut self, other: TranslatorBySequence) -> TranslatorBySequence {
        self.children.extend(other.children);
        self
    }
}

impl FromIterator<Translator> for TranslatorBySequence {
    fn from_iter<I: IntoIterator<Item = Translator>>(iter: I) -> Self {
        TranslatorBySequence::new(iter)
    }
}
