//! In-memory store
//!
//! A single string behind a RwLock.

use parking_lot::RwLock;

use super::Store;

/// Store that keeps the value in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RwLock<String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `value`
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(value.into()),
        }
    }
}

impl Store for MemoryStore {
    fn get(&self) -> String {
        self.value.read().clone()
    }

    fn set(&self, value: String) {
        *self.value.write() = value;
    }

    fn reset(&self) {
        self.value.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        assert_eq!(MemoryStore::new().get(), "");
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("first".to_string());
        store.set("second".to_string());
        assert_eq!(store.get(), "second");
    }

    #[test]
    fn test_reset_restores_empty() {
        let store = MemoryStore::with_value(r#"{"foo":"warn"}"#);
        store.reset();
        assert_eq!(store.get(), "");
    }
}
