//! Pattern parsing and matching
//!
//! A table key is one of three shapes:
//!
//! | Key         | Shape         | Matches                          |
//! |-------------|---------------|----------------------------------|
//! | `*`         | universal     | every name                       |
//! | `<prefix>*` | prefix        | names starting with `<prefix>`   |
//! | anything    | exact         | that exact name                  |
//!
//! Only a single trailing `*` is a wildcard. A `*` anywhere else is a
//! literal character.

const WILDCARD: &str = "*";

/// A parsed pattern borrowing from its table key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    /// `*`
    Any,

    /// `foo*` (holds `foo`)
    Prefix(&'a str),

    /// `foo`
    Exact(&'a str),
}

impl<'a> Pattern<'a> {
    /// Classify a table key
    pub fn parse(key: &'a str) -> Self {
        if key == WILDCARD {
            Pattern::Any
        } else if let Some(prefix) = key.strip_suffix(WILDCARD) {
            Pattern::Prefix(prefix)
        } else {
            Pattern::Exact(key)
        }
    }

    /// Check whether `name` is covered by this pattern
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Prefix(prefix) => name.starts_with(prefix),
            Pattern::Exact(exact) => name == *exact,
        }
    }
}
