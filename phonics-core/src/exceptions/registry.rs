//! Exception registry
//!
//! Manages the built-in overrides and any overrides loaded at runtime.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::warn;

use crate::error::{PhonicsError, Result};
use crate::exceptions::config::ExceptionConfig;
use crate::exceptions::matcher::WordMatcher;
use crate::tables::PatternTables;

/// Built-in overrides
static BUILTIN: OnceLock<ExceptionRegistry> = OnceLock::new();

/// What an override does to a catalog unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Break the unit apart
    Split,
    /// Keep the unit whole even when the scan would otherwise break it
    Merge,
}

#[derive(Debug, Clone, Default)]
struct KeyOverrides {
    split: Vec<WordMatcher>,
    merge: Vec<WordMatcher>,
}

/// Per-key word overrides consulted by the scan
#[derive(Debug, Clone, Default)]
pub struct ExceptionRegistry {
    overrides: HashMap<String, KeyOverrides>,
}

impl ExceptionRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shipped with the crate
    pub fn builtin() -> &'static ExceptionRegistry {
        BUILTIN.get_or_init(|| {
            let source = include_str!("../../configs/exceptions.toml");
            match ExceptionConfig::from_toml_str(source).and_then(|c| Self::from_config(&c)) {
                Ok(registry) => registry,
                Err(e) => {
                    log::error!("Failed to load built-in exceptions: {e}");
                    Self::new()
                }
            }
        })
    }

    /// Build a registry from a parsed configuration
    pub fn from_config(config: &ExceptionConfig) -> Result<Self> {
        let mut registry = Self::new();
        registry.extend_from_config(config)?;
        Ok(registry)
    }

    /// Add every entry of `config`
    ///
    /// Fails without modifying the registry if an entry has an empty key or
    /// any regex does not compile.
    pub fn extend_from_config(&mut self, config: &ExceptionConfig) -> Result<()> {
        let mut compiled = Vec::with_capacity(config.len());
        for (directive, entries) in [
            (Directive::Split, &config.split),
            (Directive::Merge, &config.merge),
        ] {
            for entry in entries {
                if entry.key.trim().is_empty() {
                    return Err(PhonicsError::InvalidEntry(format!(
                        "{directive:?} entry with an empty key"
                    )));
                }
                compiled.push((entry.key.as_str(), directive, entry.matchers()?));
            }
        }

        for (key, directive, matchers) in compiled {
            for matcher in matchers {
                self.register(key, directive, matcher);
            }
        }

        Ok(())
    }

    /// Register a single matcher
    ///
    /// Keys that no scan catalog contains are dropped with a warning and
    /// `false` is returned.
    pub fn register(&mut self, key: &str, directive: Directive, matcher: WordMatcher) -> bool {
        let key = key.trim().to_ascii_lowercase();
        if !PatternTables::english().is_scan_unit(&key) {
            warn!("Ignoring exception for {key:?}: not a scan unit");
            return false;
        }

        let slot = self.overrides.entry(key).or_default();
        let list = match directive {
            Directive::Split => &mut slot.split,
            Directive::Merge => &mut slot.merge,
        };
        if !list.contains(&matcher) {
            list.push(matcher);
        }
        true
    }

    /// Look up the override for `key` in `word`
    ///
    /// Split matchers are consulted first, so a word matching both wins as a
    /// split.
    pub fn resolve(&self, word: &str, key: &str) -> Option<Directive> {
        let slot = self.overrides.get(key).or_else(|| {
            // Callers usually pass catalog entries, which are already lowercase
            self.overrides.get(&key.to_ascii_lowercase())
        })?;

        if slot.split.iter().any(|m| m.matches(word)) {
            Some(Directive::Split)
        } else if slot.merge.iter().any(|m| m.matches(word)) {
            Some(Directive::Merge)
        } else {
            None
        }
    }

    /// Check if `key` must be broken apart in `word`
    pub fn should_split(&self, word: &str, key: &str) -> bool {
        self.resolve(word, key) == Some(Directive::Split)
    }

    /// Number of keys with at least one override
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// No overrides registered
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Keys with overrides, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.overrides.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
