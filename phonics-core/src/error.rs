//! Error types
//!
//! Splitting a word never fails. Errors only come from loading and
//! validating exception configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a segmenter configuration
#[derive(Error, Debug)]
pub enum PhonicsError {
    /// A regex matcher in an exception entry failed to compile
    #[error("invalid pattern {pattern:?} for key {key:?}: {source}")]
    InvalidPattern {
        /// Catalog key the entry targets
        key: String,
        /// The offending regex source
        pattern: String,
        /// Compilation error
        #[source]
        source: regex::Error,
    },

    /// An exception entry is structurally unusable
    #[error("invalid exception entry: {0}")]
    InvalidEntry(String),

    /// Exception configuration is not valid TOML for the schema
    #[error("failed to parse exception config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Exception configuration file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, PhonicsError>;
