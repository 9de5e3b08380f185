mod candidates;
mod dict_key;
mod order;
mod rule;

pub use candidates::Candidates;
pub use dict_key::DictKey;
pub use order::Order;
pub use rule::Rule;
