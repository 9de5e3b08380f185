pub mod error;
pub mod template;
pub mod translator;
pub mod types;

pub use error::ConfigError;
pub use translator::{Translator, TranslatorByDict, TranslatorByRegex, TranslatorBySequence};
pub use types::{Candidates, DictKey, Order, Rule};

/// Creates a `HashMap<DictKey, String>` from key-value pairs.
///
/// Keys are converted via `Into<DictKey>`, so you can pass single strings
/// or tuples of strings for multi-field keys. Values are converted via
/// `Into<String>`.
///
/// # Example
///
/// ```
/// use translator::{dict, DictKey};
///
/// let map = dict! {
///     "apple" => "fruit",
///     ("volumes", "v1") => "archive",
/// };
/// assert_eq!(map.len(), 2);
/// assert_eq!(map[&DictKey::from("apple")], "fruit");
/// ```
#[macro_export]
macro_rules! dict {
    {} => {
        ::std::collections::HashMap::<$crate::DictKey, ::std::string::String>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<$crate::DictKey, ::std::string::String>::new();
            $(
                map.insert(
                    ::std::convert::Into::<$crate::DictKey>::into($key),
                    ::std::convert::Into::<::std::string::String>::into($value),
                );
            )+
            map
        }
    };
}
