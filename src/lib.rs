//! # logpatterns
//!
//! Decide, for an arbitrary logger or module name, whether logging is
//! enabled and at which level, based on user-configured patterns:
//! - Exact names (`db.pool`)
//! - Prefix wildcards (`db.*`)
//! - The universal wildcard (`*`)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Registry                             │
//! │        get / set / matches / level  (never fail)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ JSON text
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Store (trait)                          │
//! │              MemoryStore    │    FileStore                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use logpatterns::{MemoryStore, PatternTable, Registry};
//!
//! let registry = Registry::new(MemoryStore::new());
//! let table: PatternTable = [("db.*", Some("warn")), ("http", None)]
//!     .into_iter()
//!     .collect();
//! registry.set(&table);
//!
//! assert!(registry.matches("db.pool"));
//! assert_eq!(registry.level("db.pool"), "warn");
//! assert_eq!(registry.level("http"), "info");
//! assert!(!registry.matches("cache"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod pattern;
pub mod table;
pub mod store;
pub mod registry;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PatternError, Result};
pub use config::{Config, DEFAULT_LEVEL};
pub use pattern::Pattern;
pub use table::PatternTable;
pub use store::{FileStore, MemoryStore, Store};
pub use registry::Registry;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of logpatterns
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
