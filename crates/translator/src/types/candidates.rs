/// The candidate input of one query: a single string, or an ordered list
/// of alternative spellings of the same conceptual input (for example,
/// equivalent path forms).
///
/// Order is caller-controlled and significant; see
/// [`Order`](crate::Order) for how it interacts with a translator's
/// internal elements. Query methods accept anything convertible into
/// `Candidates`, so call sites can pass a `&str`, an array of `&str`, or
/// a slice of `String`s directly.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    strings: Vec<&'a str>,
}

impl<'a> Candidates<'a> {
    /// The candidate strings, in declared order.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.strings
    }

    /// Number of candidate strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when the query carries no candidate strings at all.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

// From implementations for common input shapes

impl<'a> From<&'a str> for Candidates<'a> {
    fn from(s: &'a str) -> Self {
        Candidates { strings: vec![s] }
    }
}

impl<'a> From<&'a String> for Candidates<'a> {
    fn from(s: &'a String) -> Self {
        Candidates {
            strings: vec![s.as_str()],
        }
    }
}

impl<'a> From<&'a [&'a str]> for Candidates<'a> {
    fn from(strings: &'a [&'a str]) -> Self {
        Candidates {
            strings: strings.to_vec(),
        }
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Candidates<'a> {
    fn from(strings: &'a [&'a str; N]) -> Self {
        Candidates {
            strings: strings.to_vec(),
        }
    }
}

impl<'a> From<Vec<&'a str>> for Candidates<'a> {
    fn from(strings: Vec<&'a str>) -> Self {
        Candidates { strings }
    }
}

impl<'a> From<&'a [String]> for Candidates<'a> {
    fn from(strings: &'a [String]) -> Self {
        Candidates {
            strings: strings.iter().map(String::as_str).collect(),
        }
    }
}

impl<'a> From<&'a Vec<String>> for Candidates<'a> {
    fn from(strings: &'a Vec<String>) -> Self {
        strings.as_slice().into()
    }
}
