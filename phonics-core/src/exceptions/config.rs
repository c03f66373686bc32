//! Exception configuration schema
//!
//! This module defines the TOML schema for exception overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PhonicsError, Result};
use crate::exceptions::matcher::WordMatcher;
use crate::tables::PatternTables;

/// Root exception configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExceptionConfig {
    /// Force-split entries
    #[serde(default)]
    pub split: Vec<ExceptionEntry>,
    /// Force-merge entries
    #[serde(default)]
    pub merge: Vec<ExceptionEntry>,
}

/// Matchers for one catalog key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    /// Catalog unit the override applies to (`oo`, `th`, `an`, ...)
    pub key: String,
    /// Exact words
    #[serde(default)]
    pub words: Vec<String>,
    /// Regular expressions over the whole word
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl ExceptionEntry {
    /// Compile the entry's matchers
    pub(crate) fn matchers(&self) -> Result<Vec<WordMatcher>> {
        let mut matchers: Vec<WordMatcher> =
            self.words.iter().map(WordMatcher::exact).collect();

        for source in &self.patterns {
            let matcher =
                WordMatcher::pattern(source).map_err(|e| PhonicsError::InvalidPattern {
                    key: self.key.clone(),
                    pattern: source.clone(),
                    source: e,
                })?;
            matchers.push(matcher);
        }

        Ok(matchers)
    }
}

/// Findings of [`ExceptionConfig::validate`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the configuration unusable
    pub errors: Vec<String>,
    /// Entries that would be ignored
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// No errors were found (warnings are allowed)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl ExceptionConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| PhonicsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&source)
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.split.len() + self.merge.len()
    }

    /// No entries at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check every entry against the scan catalogs
    ///
    /// Unknown keys are warnings because the registry drops them as no-op
    /// overrides; empty keys, entries without matchers and regexes that do
    /// not compile are errors.
    pub fn validate(&self, tables: &PatternTables) -> ValidationReport {
        let mut report = ValidationReport::default();

        let sections = [("split", &self.split), ("merge", &self.merge)];
        for (section, entries) in sections {
            for (i, entry) in entries.iter().enumerate() {
                let at = format!("{section}[{i}]");

                if entry.key.trim().is_empty() {
                    report.errors.push(format!("{at}: empty key"));
                    continue;
                }
                if entry.words.is_empty() && entry.patterns.is_empty() {
                    report
                        .errors
                        .push(format!("{at} ({}): no words or patterns", entry.key));
                }
                if let Err(e) = entry.matchers() {
                    report.errors.push(format!("{at}: {e}"));
                }
                if !tables.is_scan_unit(&entry.key) {
                    report.warnings.push(format!(
                        "{at}: key {:?} is not a scan unit and will be ignored",
                        entry.key
                    ));
                }
            }
        }

        report
    }
}
