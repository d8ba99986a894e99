//! Pattern Table
//!
//! Ordered mapping from pattern key to an optional level, plus its JSON
//! codec.
//!
//! ## Ordering
//! Entries keep the order they were inserted (or appeared in the parsed
//! JSON object). Level resolution takes the first matching entry, so the
//! backing map must be an `IndexMap`, never a `HashMap`.
//!
//! ## Persisted Format
//! ```text
//! {"foo*":"warn","bar":"trace","*":null}
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PatternError, Result};
use crate::pattern::Pattern;

/// Ordered pattern → level mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternTable {
    entries: IndexMap<String, Option<String>>,
}

impl PatternTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a pattern. A replaced key keeps its position.
    pub fn insert(&mut self, pattern: impl Into<String>, level: Option<String>) -> Option<Option<String>> {
        self.entries.insert(pattern.into(), level)
    }

    /// Level stored for an exact key (outer `None` = key absent)
    pub fn get(&self, pattern: &str) -> Option<Option<&str>> {
        self.entries.get(pattern).map(|level| level.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(pattern, level)| (pattern.as_str(), level.as_deref()))
    }

    /// First entry, in table order, whose pattern matches `name`
    pub fn first_match(&self, name: &str) -> Option<(&str, Option<&str>)> {
        self.iter()
            .find(|(pattern, _)| Pattern::parse(pattern).matches(name))
    }

    /// Whether any pattern matches `name`
    pub fn any_match(&self, name: &str) -> bool {
        self.first_match(name).is_some()
    }

    // =========================================================================
    // JSON Codec
    // =========================================================================

    /// Parse a JSON object into a table.
    ///
    /// Fails on malformed JSON and on any top-level value that is not an
    /// object. Entry values that are neither strings nor `null` are kept
    /// as "no explicit level".
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: IndexMap<String, Value> = serde_json::from_str(text)
            .map_err(|e| PatternError::Deserialization(e.to_string()))?;

        let entries = raw
            .into_iter()
            .map(|(pattern, value)| {
                let level = match value {
                    Value::String(level) => Some(level),
                    Value::Null => None,
                    other => {
                        tracing::debug!(%pattern, value = %other, "ignoring non-string level");
                        None
                    }
                };
                (pattern, level)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Compact JSON text, entries in table order
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries)
            .map_err(|e| PatternError::Serialization(e.to_string()))
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for PatternTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(pattern, level)| (pattern.into(), level.map(Into::into)))
            .collect();
        Self { entries }
    }
}

impl IntoIterator for PatternTable {
    type Item = (String, Option<String>);
    type IntoIter = indexmap::map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keeps_document_order() {
        let table = PatternTable::from_json(r#"{"zeta":"warn","alpha":null,"mid*":"debug"}"#).unwrap();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid*"]);
    }

    #[test]
    fn test_from_json_duplicate_key_last_value_wins() {
        let table = PatternTable::from_json(r#"{"foo":"warn","bar":null,"foo":"trace"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("foo"), Some(Some("trace")));
        assert_eq!(table.iter().next(), Some(("foo", Some("trace"))));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        for text in ["", "not json", "[1,2]", "\"foo\"", "null", "42", "{\"foo\":"] {
            assert!(
                matches!(PatternTable::from_json(text), Err(PatternError::Deserialization(_))),
                "expected failure for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_from_json_non_string_level_is_unset() {
        let table = PatternTable::from_json(r#"{"foo":3,"bar":true,"baz":{"x":1}}"#).unwrap();
        assert_eq!(table.get("foo"), Some(None));
        assert_eq!(table.get("bar"), Some(None));
        assert_eq!(table.get("baz"), Some(None));
    }

    #[test]
    fn test_to_json_is_compact() {
        let table: PatternTable = [("foo", Some("bar")), ("*", None)].into_iter().collect();
        assert_eq!(table.to_json().unwrap(), r#"{"foo":"bar","*":null}"#);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut table = PatternTable::new();
        table.insert("a", Some("warn".to_string()));
        table.insert("b", None);
        let previous = table.insert("a", Some("trace".to_string()));

        assert_eq!(previous, Some(Some("warn".to_string())));
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("a", Some("trace")), ("b", None)]);
    }

    #[test]
    fn test_first_match_respects_order() {
        let table: PatternTable = [("foo*", Some("warn")), ("foob", Some("debug"))]
            .into_iter()
            .collect();
        assert_eq!(table.first_match("foob"), Some(("foo*", Some("warn"))));
        assert_eq!(table.first_match("bar"), None);
        assert!(!table.any_match("bar"));
    }
}
