//! Segmenter configuration

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::exceptions::{ExceptionConfig, ExceptionRegistry};

/// Default configuration values
pub mod defaults {
    /// Compound splitting changes the cascade order, so it is opt-in
    pub const COMPOUND_WORDS: bool = false;

    /// Insert missing boundaries before common suffixes
    pub const SUFFIX_TOUCH_UP: bool = true;

    /// Try affixes when the cascade leaves a word whole
    pub const FALLBACK: bool = true;
}

/// Segmenter configuration
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    pub(crate) compound_words: bool,
    pub(crate) suffix_touch_up: bool,
    pub(crate) fallback: bool,
    pub(crate) exceptions: Arc<ExceptionRegistry>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            compound_words: defaults::COMPOUND_WORDS,
            suffix_touch_up: defaults::SUFFIX_TOUCH_UP,
            fallback: defaults::FALLBACK,
            exceptions: Arc::new(ExceptionRegistry::builtin().clone()),
        }
    }
}

impl SegmenterConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn compound_words(&self) -> bool {
        self.compound_words
    }

    pub fn suffix_touch_up(&self) -> bool {
        self.suffix_touch_up
    }

    pub fn fallback(&self) -> bool {
        self.fallback
    }

    /// The exception overrides in effect
    pub fn exceptions(&self) -> &ExceptionRegistry {
        &self.exceptions
    }
}

/// Fluent builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    compound_words: Option<bool>,
    suffix_touch_up: Option<bool>,
    fallback: Option<bool>,
    exceptions: Option<ExceptionRegistry>,
    extra_configs: Vec<ExceptionConfig>,
    extra_files: Vec<PathBuf>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Split known compounds into their halves before anything else
    pub fn compound_words(mut self, enabled: bool) -> Self {
        self.compound_words = Some(enabled);
        self
    }

    /// Insert missing boundaries before common suffixes
    pub fn suffix_touch_up(mut self, enabled: bool) -> Self {
        self.suffix_touch_up = Some(enabled);
        self
    }

    /// Try affixes when the cascade leaves a word whole
    pub fn fallback(mut self, enabled: bool) -> Self {
        self.fallback = Some(enabled);
        self
    }

    /// Replace the built-in exception overrides
    pub fn exceptions(mut self, registry: ExceptionRegistry) -> Self {
        self.exceptions = Some(registry);
        self
    }

    /// Add overrides on top of the base registry
    pub fn exception_config(mut self, config: ExceptionConfig) -> Self {
        self.extra_configs.push(config);
        self
    }

    /// Add overrides from a TOML file on top of the base registry
    pub fn exceptions_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.extra_files.push(path.into());
        self
    }

    /// Build the configuration
    ///
    /// Fails if an exception file cannot be read or parsed, or an entry is
    /// invalid.
    pub fn build(self) -> Result<SegmenterConfig> {
        let mut registry = self
            .exceptions
            .unwrap_or_else(|| ExceptionRegistry::builtin().clone());

        for config in &self.extra_configs {
            registry.extend_from_config(config)?;
        }
        for path in &self.extra_files {
            let config = ExceptionConfig::from_file(path)?;
            registry.extend_from_config(&config)?;
            log::info!("Loaded {} exception entries from {}", config.len(), path.display());
        }

        Ok(SegmenterConfig {
            compound_words: self.compound_words.unwrap_or(defaults::COMPOUND_WORDS),
            suffix_touch_up: self.suffix_touch_up.unwrap_or(defaults::SUFFIX_TOUCH_UP),
            fallback: self.fallback.unwrap_or(defaults::FALLBACK),
            exceptions: Arc::new(registry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonicsError;

    #[test]
    fn test_defaults() {
        let config = SegmenterConfig::builder().build().unwrap();
        assert!(!config.compound_words());
        assert!(config.suffix_touch_up());
        assert!(config.fallback());
        assert!(config.exceptions().should_split("zoology", "oo"));
    }

    #[test]
    fn test_builder_options() {
        let config = SegmenterConfig::builder()
            .compound_words(true)
            .suffix_touch_up(false)
            .fallback(false)
            .exceptions(ExceptionRegistry::new())
            .build()
            .unwrap();
        assert!(config.compound_words());
        assert!(!config.suffix_touch_up());
        assert!(!config.fallback());
        assert!(config.exceptions().is_empty());
    }

    #[test]
    fn test_exception_config_extends_builtin() {
        let extra = ExceptionConfig::from_toml_str(
            "[[merge]]\nkey = \"an\"\nwords = [\"banana\"]\n",
        )
        .unwrap();
        let config = SegmenterConfig::builder()
            .exception_config(extra)
            .build()
            .unwrap();
        assert!(config.exceptions().should_split("zoology", "oo"));
        assert!(config.exceptions().resolve("banana", "an").is_some());
    }

    #[test]
    fn test_exceptions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        std::fs::write(&path, "[[split]]\nkey = \"th\"\nwords = [\"hothouse\"]\n").unwrap();

        let config = SegmenterConfig::builder()
            .exceptions_file(&path)
            .build()
            .unwrap();
        assert!(config.exceptions().should_split("hothouse", "th"));

        let missing = SegmenterConfig::builder()
            .exceptions_file(dir.path().join("missing.toml"))
            .build();
        assert!(matches!(missing, Err(PhonicsError::Io { .. })));
    }

    #[test]
    fn test_bad_pattern_fails_build() {
        let extra = ExceptionConfig::from_toml_str(
            "[[split]]\nkey = \"oo\"\npatterns = [\"[\"]\n",
        )
        .unwrap();
        let result = SegmenterConfig::builder().exception_config(extra).build();
        assert!(matches!(result, Err(PhonicsError::InvalidPattern { .. })));
    }
}
