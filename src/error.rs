//! Error types for logpatterns
//!
//! The public registry operations never fail; these errors travel only
//! through the `try_*` variants and the store backends' internals.

use thiserror::Error;

/// Result type alias using PatternError
pub type Result<T> = std::result::Result<T, PatternError>;

/// Unified error type for logpatterns operations
#[derive(Debug, Error)]
pub enum PatternError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
