//! Configuration module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Segmentation options
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Split listed compound words into their halves
    pub compound_words: bool,

    /// Force a boundary before common suffixes
    pub suffix_touch_up: bool,

    /// Try the ordinary affix tables when nothing else splits a word
    pub fallback: bool,

    /// Extra exception file applied on top of the built-in list
    pub exceptions: Option<PathBuf>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            compound_words: false,
            suffix_touch_up: true,
            fallback: true,
            exceptions: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include the deciding stage with every word
    pub explain: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            explain: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Word count from which batches are split in parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1000,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load a configuration file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::info!("Loaded CLI configuration from {}", path.display());
        Ok(config)
    }
}
