//! Registry Module
//!
//! The pattern registry: reads and writes the pattern table through a
//! [`Store`] and answers "is this name configured, and at what level".
//!
//! ## Responsibilities
//! - Serialize the whole table into the store on every write
//! - Re-read and re-parse the store on every query (no caching)
//! - Never surface an error from `get`/`set`/`matches`/`level`
//!
//! ## Failure Policy
//! ```text
//! get():  store text ──parse──► table
//!                       └─ fail ─► empty table
//! set():  value ──serialize──► store.set(text)
//!                  └─ fail ─► nothing written
//! ```

use serde::Serialize;

use crate::config::Config;
use crate::error::{PatternError, Result};
use crate::store::Store;
use crate::table::PatternTable;

/// Pattern registry over a store
///
/// Holds no table state of its own; the store is the only source of
/// truth, so two registries over the same store always agree.
pub struct Registry<S: Store> {
    /// Backing store holding the JSON text
    store: S,

    /// Registry configuration
    config: Config,
}

impl<S: Store> Registry<S> {
    /// Create a registry with the default configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Create a registry with an explicit configuration
    pub fn with_config(store: S, config: Config) -> Self {
        Self { store, config }
    }

    // =========================================================================
    // Table Access
    // =========================================================================

    /// Current table, or an empty table if the stored text does not parse
    pub fn get(&self) -> PatternTable {
        self.try_get().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "stored patterns unreadable, treating as empty");
            PatternTable::new()
        })
    }

    /// Current table, surfacing parse failures
    pub fn try_get(&self) -> Result<PatternTable> {
        PatternTable::from_json(&self.store.get())
    }

    /// Replace the stored table with `patterns`.
    ///
    /// Accepts anything serde can serialize, a [`PatternTable`] or a plain
    /// map alike. If serialization fails nothing is written and the call
    /// still returns normally.
    pub fn set<T: Serialize + ?Sized>(&self, patterns: &T) {
        if let Err(e) = self.try_set(patterns) {
            tracing::warn!(error = %e, "dropping pattern update");
        }
    }

    /// Replace the stored table, surfacing serialization failures
    pub fn try_set<T: Serialize + ?Sized>(&self, patterns: &T) -> Result<()> {
        let text = serde_json::to_string(patterns)
            .map_err(|e| PatternError::Serialization(e.to_string()))?;
        self.store.set(text);
        Ok(())
    }

    /// Clear the backing store
    pub fn reset(&self) {
        self.store.reset();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether any configured pattern matches `name`
    pub fn matches(&self, name: &str) -> bool {
        self.get().any_match(name)
    }

    /// Level for `name`.
    ///
    /// Taken from the first matching entry in table order. Falls back to
    /// the configured default level when that entry has no level (or an
    /// empty one) and when nothing matches.
    pub fn level(&self, name: &str) -> String {
        let table = self.get();
        match table.first_match(name) {
            Some((_, Some(level))) if !level.is_empty() => level.to_string(),
            _ => self.config.default_level.clone(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
