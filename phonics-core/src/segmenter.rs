//! Segmenter: the public face of the cascade

use log::trace;
use serde::Serialize;

use crate::cascade::postprocess::PostProcessor;
use crate::cascade::{Cascade, RuleContext, Segmentation, Stage};
use crate::classifier::EnglishClassifier;
use crate::config::SegmenterConfig;
use crate::format::format;
use crate::tables::PatternTables;

/// How a word was split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The word as given
    pub word: String,
    /// Hyphenated result, identical to [`Segmenter::split`]
    pub split: String,
    /// The segments in the caller's casing
    pub segments: Vec<String>,
    /// The stage that decided the top-level split
    pub stage: Stage,
    /// Whether the affix fallback placed the boundary
    pub fallback_used: bool,
}

/// Splits English words into phonics chunks
///
/// A segmenter holds only immutable state and can be shared between threads.
#[derive(Debug)]
pub struct Segmenter {
    config: SegmenterConfig,
    cascade: Cascade,
    post: PostProcessor,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Segmenter with the default configuration
    pub fn new() -> Self {
        Self::with_config(SegmenterConfig::default())
    }

    pub fn with_config(config: SegmenterConfig) -> Self {
        let cascade = Cascade::new(config.compound_words);
        let post = PostProcessor::new(config.suffix_touch_up, config.fallback);
        Self {
            config,
            cascade,
            post,
        }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Hyphenate `word` at its phonics boundaries
    ///
    /// Removing the hyphens from the result always gives back `word`. Words
    /// shorter than two characters, and words with no boundary, are
    /// returned unchanged.
    pub fn split(&self, word: &str) -> String {
        let (segmentation, _, _) = self.run(word);
        format(word, &segmentation)
    }

    /// Split `word` and report how the split was decided
    pub fn analyze(&self, word: &str) -> Analysis {
        let (segmentation, stage, fallback_used) = self.run(word);
        let segments = segmentation
            .pieces(word)
            .map(|pieces| pieces.into_iter().map(str::to_string).collect())
            .unwrap_or_else(|| vec![word.to_string()]);

        Analysis {
            word: word.to_string(),
            split: format(word, &segmentation),
            segments,
            stage,
            fallback_used,
        }
    }

    /// Offsets of the boundaries of `word`
    pub fn segment(&self, word: &str) -> Segmentation {
        self.run(word).0
    }

    /// Split many words, keeping their order
    #[cfg(feature = "parallel")]
    pub fn split_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        use rayon::prelude::*;

        words.par_iter().map(|w| self.split(w.as_ref())).collect()
    }

    /// Split many words, keeping their order
    #[cfg(not(feature = "parallel"))]
    pub fn split_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        words.iter().map(|w| self.split(w.as_ref())).collect()
    }

    fn run(&self, word: &str) -> (Segmentation, Stage, bool) {
        if word.chars().count() < 2 {
            return (Segmentation::new(word.len()), Stage::Passthrough, false);
        }

        let lower = word.to_ascii_lowercase();
        let ctx = RuleContext::new(
            &lower,
            PatternTables::english(),
            &EnglishClassifier,
            &self.config.exceptions,
        );

        let (mut segmentation, stage) = self.cascade.run(&ctx);
        let fallback_used = self.post.apply(&self.cascade, &ctx, &mut segmentation);
        trace!(
            "{word:?}: stage {stage}, cuts {:?}{}",
            segmentation.cuts(),
            if fallback_used { " (fallback)" } else { "" }
        );

        (segmentation, stage, fallback_used)
    }
}
