//! File pattern resolution using glob

use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve file patterns to file paths, keeping the order of the patterns
///
/// Paths within one pattern are sorted; a path matched by an earlier pattern
/// is not repeated. A pattern that matches no file is an error.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched: Vec<PathBuf> = paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("Skipping unreadable path: {e}");
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();

        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        matched.sort();
        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}
