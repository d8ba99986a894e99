//! Configuration for logpatterns
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{PatternError, Result};

/// Level reported for names whose matching pattern carries no explicit level
pub const DEFAULT_LEVEL: &str = "info";

/// Main configuration for a registry instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Level Resolution
    // -------------------------------------------------------------------------
    /// Level returned when the first matching pattern has no level,
    /// and when nothing matches at all
    pub default_level: String,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// File holding the persisted pattern table (used by `FileStore`)
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            store_path: PathBuf::from("./logpatterns.json"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings no registry can work with
    pub fn validate(&self) -> Result<()> {
        if self.default_level.trim().is_empty() {
            return Err(PatternError::Config(
                "default level must not be empty".to_string(),
            ));
        }
        if self.store_path.as_os_str().is_empty() {
            return Err(PatternError::Config(
                "store path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the fallback level
    pub fn default_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Set the file the pattern table is persisted in
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_level, "info");
        assert_eq!(config.store_path, PathBuf::from("./logpatterns.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .default_level("warn")
            .store_path("/tmp/levels.json")
            .build();
        assert_eq!(config.default_level, "warn");
        assert_eq!(config.store_path, PathBuf::from("/tmp/levels.json"));
    }

    #[test]
    fn test_validate_rejects_blank_level() {
        let config = Config::builder().default_level("  ").build();
        assert!(matches!(config.validate(), Err(PatternError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = Config::builder().store_path("").build();
        assert!(matches!(config.validate(), Err(PatternError::Config(_))));
    }
}
