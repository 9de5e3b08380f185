//! Shared dual-axis traversal.
//!
//! Every strategy enumerates a grid of (element, group) attempts, where an
//! element is a pattern rule or a child translator and a group is one
//! candidate string (or, for sequences under the default order, the whole
//! candidate list). [`Order`] selects which axis is the outer loop. The
//! loops live here once, shared by all strategies, so the two orders
//! cannot drift apart.

use crate::types::Order;

/// Collect every unique result of `attempt` over the grid, in priority
/// order under `order`.
pub(crate) fn collect_all<E, G>(
    elements: &[E],
    groups: &[G],
    order: Order,
    attempt: impl Fn(&E, &G) -> Vec<String>,
) -> Vec<String> {
    let mut results = Vec::new();
    match order {
        Order::RulesFirst => {
            for element in elements {
                for group in groups {
                    merge_unique(&mut results, attempt(element, group));
                }
            }
        }
        Order::StringsFirst => {
            for group in groups {
                for element in elements {
                    merge_unique(&mut results, attempt(element, group));
                }
            }
        }
    }
    results
}

/// Return the first result of `attempt` over the grid under `order`,
/// stopping at the first hit.
pub(crate) fn find_first<E, G>(
    elements: &[E],
    groups: &[G],
    order: Order,
    attempt: impl Fn(&E, &G) -> Option<String>,
) -> Option<String> {
    match order {
        Order::RulesFirst => {
            for element in elements {
                for group in groups {
                    if let Some(result) = attempt(element, group) {
                        return Some(result);
                    }
                }
            }
        }
        Order::StringsFirst => {
            for group in groups {
                for element in elements {
                    if let Some(result) = attempt(element, group) {
                        return Some(result);
                    }
                }
            }
        }
    }
    None
}

/// Append results not already present, preserving arrival order.
fn merge_unique(results: &mut Vec<String>, new: Vec<String>) {
    for item in new {
        if !results.contains(&item) {
            results.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn label(element: &&str, group: &&str) -> Vec<String> {
        vec![format!("{element}:{group}")]
    }

    #[test]
    fn rules_first_iterates_elements_outermost() {
        let results = collect_all(&["A", "B"], &["x", "y"], Order::RulesFirst, label);
        assert_eq!(results, ["A:x", "A:y", "B:x", "B:y"]);
    }

    #[test]
    fn strings_first_iterates_groups_outermost() {
        let results = collect_all(&["A", "B"], &["x", "y"], Order::StringsFirst, label);
        assert_eq!(results, ["A:x", "B:x", "A:y", "B:y"]);
    }

    #[test]
    fn collect_all_keeps_first_occurrence_of_duplicates() {
        let results = collect_all(&["A", "B"], &["x"], Order::RulesFirst, |_, group| {
            vec![format!("same:{group}")]
        });
        assert_eq!(results, ["same:x"]);
    }

    #[test]
    fn order_selects_a_different_winner() {
        // Only B:x and A:y produce results.
        let attempt = |element: &&str, group: &&str| {
            (matches!((*element, *group), ("B", "x") | ("A", "y")))
                .then(|| format!("{element}:{group}"))
        };

        let rules_first = find_first(&["A", "B"], &["x", "y"], Order::RulesFirst, attempt);
        assert_eq!(rules_first.as_deref(), Some("A:y"));

        let strings_first = find_first(&["A", "B"], &["x", "y"], Order::StringsFirst, attempt);
        assert_eq!(strings_first.as_deref(), Some("B:x"));
    }

    #[test]
    fn find_first_short_circuits() {
        let attempts = Cell::new(0);
        let result = find_first(&["A", "B"], &["x", "y"], Order::RulesFirst, |_, _| {
            attempts.set(attempts.get() + 1);
            Some("hit".to_string())
        });
        assert_eq!(result.as_deref(), Some("hit"));
        assert_eq!(attempts.get(), 1);
    }

    #[test]
    fn empty_axes_produce_nothing() {
        let none: &[&str] = &[];
        assert!(collect_all(none, &["x"], Order::RulesFirst, label).is_empty());
        assert!(collect_all(&["A"], none, Order::StringsFirst, label).is_empty());
        assert_eq!(find_first(none, &["x"], Order::RulesFirst, |e, g| {
            label(e, g).into_iter().next()
        }), None);
    }
}
