//! Header list parsing
//!
//! Build systems hand header lists over as `a;b;c` strings. This module
//! turns them into a de-duplicated list of non-empty entries.

use std::collections::HashSet;

/// Separator used by CMake-style list strings
pub const LIST_SEPARATOR: char = ';';

/// A header list, either already split or still delimited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderList {
    List(Vec<String>),
    Delimited(String),
}

impl From<Vec<String>> for HeaderList {
    fn from(list: Vec<String>) -> Self {
        HeaderList::List(list)
    }
}

impl From<&[&str]> for HeaderList {
    fn from(list: &[&str]) -> Self {
        HeaderList::List(list.iter().map(|s| s.to_string()).collect())
    }
}

impl From<String> for HeaderList {
    fn from(s: String) -> Self {
        HeaderList::Delimited(s)
    }
}

impl From<&str> for HeaderList {
    fn from(s: &str) -> Self {
        HeaderList::Delimited(s.to_string())
    }
}

impl HeaderList {
    /// Expand into individual entries using [`LIST_SEPARATOR`]
    pub fn into_entries(self) -> Vec<String> {
        parse_list(self, LIST_SEPARATOR)
    }
}

/// Split a list on `delimiter`, dropping duplicates and empty entries.
///
/// A `HeaderList::List` is returned unchanged. For delimited input the
/// first occurrence of each entry wins, so the result keeps input order.
pub fn parse_list(input: impl Into<HeaderList>, delimiter: char) -> Vec<String> {
    let s = match input.into() {
        HeaderList::List(list) => return list,
        HeaderList::Delimited(s) => s,
    };

    let mut seen = HashSet::new();
    s.split(delimiter)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(*entry))
        .map(String::from)
        .collect()
}
