use serde::{Deserialize, Serialize};

/// Which axis is iterated outermost when enumerating matches.
///
/// The flag only matters when a query carries multiple candidate strings
/// *and* the translator has multiple internal elements (pattern rules or
/// child translators). Iteration always respects the declared order of
/// both axes; `Order` only selects which one is the outer loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Try each internal element against every candidate string before
    /// moving to the next element. This exhausts higher-priority rules
    /// across all string variants first, and is the default.
    #[default]
    RulesFirst,

    /// Try every internal element against one candidate string before
    /// moving to the next string.
    StringsFirst,
}
