//! Rule-cascade segmentation of English words into phonics chunks
//!
//! Splits a single orthographic word into hyphen-delimited chunks for
//! early-reading instruction (`rabbit` → `rab-bit`, `little` → `lit-tle`,
//! `cake` → `cake`). This is a heuristic approximation of English
//! syllabification driven by fixed pattern tables, not a dictionary or a
//! phonetic parser.
//!
//! # Architecture
//!
//! - **Classifier**: vowel/consonant decisions, including the positional `y`
//! - **Tables**: static catalogs of vowel teams, digraphs, endings and affixes
//! - **Exceptions**: per-unit split/merge overrides keyed by word or regex
//! - **Cascade**: final-stable, strong-prefix and magic-e extraction, then a
//!   left-to-right scan, then whole-word touch-ups
//! - **Format**: maps the boundaries back onto the caller's casing
//!
//! # Example
//!
//! ```rust
//! use phonics_core::{generate_phonics_split, Segmenter, SegmenterConfig};
//!
//! assert_eq!(generate_phonics_split("Rabbit"), "Rab-bit");
//! assert_eq!(generate_phonics_split("street"), "str-eet");
//!
//! let config = SegmenterConfig::builder()
//!     .compound_words(true)
//!     .build()
//!     .unwrap();
//! let segmenter = Segmenter::with_config(config);
//! assert_eq!(segmenter.split("snowman"), "snow-man");
//! ```

pub mod cascade;
pub mod classifier;
pub mod config;
pub mod error;
pub mod exceptions;
pub mod format;
pub mod segmenter;
pub mod tables;

use std::sync::OnceLock;

pub use cascade::{Segmentation, Stage};
pub use classifier::{
    is_consonant_at, is_vowel_at, EnglishClassifier, LetterClass, LetterClassifier,
};
pub use config::{ConfigBuilder, SegmenterConfig};
pub use error::{PhonicsError, Result};
pub use exceptions::{Directive, ExceptionConfig, ExceptionRegistry, WordMatcher};
pub use segmenter::{Analysis, Segmenter};
pub use tables::{Catalog, CatalogKind, PatternTables};

static DEFAULT_SEGMENTER: OnceLock<Segmenter> = OnceLock::new();

/// The process-wide segmenter with the default configuration
pub fn default_segmenter() -> &'static Segmenter {
    DEFAULT_SEGMENTER.get_or_init(Segmenter::new)
}

/// Hyphenate `word` at its phonics boundaries with the default settings
///
/// Never fails: a word without a boundary, or shorter than two
/// characters, comes back unchanged.
pub fn generate_phonics_split(word: &str) -> String {
    default_segmenter().split(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_point() {
        assert_eq!(generate_phonics_split("little"), "lit-tle");
        assert_eq!(generate_phonics_split("Market"), "Mar-ket");
    }

    #[test]
    fn test_default_segmenter_is_shared() {
        assert!(std::ptr::eq(default_segmenter(), default_segmenter()));
    }
}
