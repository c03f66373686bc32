//! Error handling for the CLI application

use std::fmt;

/// Errors specific to the command-line surface
#[derive(Debug)]
pub enum CliError {
    /// Neither words nor input files were given
    NoInput,
    /// File pattern matched nothing
    FileNotFound(String),
    /// Malformed glob pattern
    InvalidPattern(String),
    /// Unreadable or inconsistent CLI configuration
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput => write!(f, "No words given: pass WORDS or --input FILE"),
            CliError::FileNotFound(pattern) => write!(f, "No files found matching: {pattern}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
