//! Reading word lists from text files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Runs of ASCII letters in `text`, in order
///
/// Anything else (digits, punctuation, whitespace, non-Latin letters)
/// separates words, so `don't` yields `don` and `t`.
pub fn words_in(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read every word of a file, in file order
    pub fn read_words(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        let words: Vec<String> = words_in(&content).map(str::to_string).collect();
        log::debug!("{}: {} words", path.display(), words.len());
        Ok(words)
    }
}
