//! Whole-word boundary touch-ups
//!
//! Runs once on the finished segmentation of a word, whichever stage
//! produced it.

use log::debug;

use super::{Cascade, RuleContext, Segmentation};

/// Post-processing switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostProcessor {
    suffix_touch_up: bool,
    fallback: bool,
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl PostProcessor {
    pub fn new(suffix_touch_up: bool, fallback: bool) -> Self {
        Self {
            suffix_touch_up,
            fallback,
        }
    }

    /// Apply every enabled touch-up to `out`
    ///
    /// Returns `true` when the last-resort affix fallback placed a boundary.
    pub fn apply(
        &self,
        cascade: &Cascade,
        ctx: &RuleContext<'_>,
        out: &mut Segmentation,
    ) -> bool {
        rejoin_trailing_mb(ctx, out);

        if self.suffix_touch_up {
            touch_up_suffix(ctx, out);
        }

        self.fallback && out.is_single() && affix_fallback(cascade, ctx, out)
    }
}

/// `mb` at the end of a word is never divided
pub fn rejoin_trailing_mb(ctx: &RuleContext<'_>, out: &mut Segmentation) {
    let word = ctx.bytes();
    if word.ends_with(b"mb") && out.remove(word.len() - 1) {
        debug!("rejoined trailing mb in {:?}", ctx.word());
    }
}

/// Put a boundary in front of the longest boundary suffix if it is missing
pub fn touch_up_suffix(ctx: &RuleContext<'_>, out: &mut Segmentation) {
    let word = ctx.bytes();
    let c = ctx.classifier();

    let Some(suffix) = ctx.tables().boundary_suffixes.longest_suffix_of(word) else {
        return;
    };
    let at = word.len() - suffix.len();
    if at == 0 || out.has_cut(at) {
        return;
    }

    let piece = out.piece_containing(at);
    if !c.has_vowel_in(word, piece.start, at) || !c.has_vowel_in(word, at, piece.end) {
        return;
    }
    // the consonant in front of a vowel-initial suffix is its onset
    if c.is_vowel_at(word, at) && c.is_consonant_at(word, at - 1) {
        return;
    }
    if !ctx.cut_is_legal(word, at) {
        return;
    }

    out.insert(at);
    debug!("suffix touch-up before {suffix:?} in {:?}", ctx.word());
}

/// Last resort for a word left in one piece: detach an ordinary prefix or
/// suffix
///
/// A prefix remainder only goes through the extraction rules; a head left
/// before a suffix goes through the full cascade.
pub fn affix_fallback(
    cascade: &Cascade,
    ctx: &RuleContext<'_>,
    out: &mut Segmentation,
) -> bool {
    let word = ctx.bytes();
    let n = word.len();
    let tables = ctx.tables();

    for prefix in tables.prefixes.prefixes_of(word) {
        let at = prefix.len();
        if at < n && detachable(ctx, at) {
            out.insert(at);
            cascade.extract(ctx, at..n, out);
            debug!("fallback prefix {prefix:?} in {:?}", ctx.word());
            return true;
        }
    }

    for suffix in tables.suffixes.suffixes_of(word) {
        let at = n - suffix.len();
        if at > 0 && detachable(ctx, at) {
            out.insert(at);
            cascade.segment(ctx, 0..at, out);
            debug!("fallback suffix {suffix:?} in {:?}", ctx.word());
            return true;
        }
    }

    false
}

fn detachable(ctx: &RuleContext<'_>, at: usize) -> bool {
    let word = ctx.bytes();
    let c = ctx.classifier();
    c.has_vowel_in(word, 0, at)
        && c.has_vowel_in(word, at, word.len())
        && ctx.cut_is_legal(word, at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::EnglishClassifier;
    use crate::exceptions::ExceptionRegistry;
    use crate::tables::PatternTables;

    fn with_ctx<T>(word: &str, f: impl FnOnce(&RuleContext<'_>) -> T) -> T {
        let ctx = RuleContext::new(
            word,
            PatternTables::english(),
            &EnglishClassifier,
            ExceptionRegistry::builtin(),
        );
        f(&ctx)
    }

    fn single(word: &str) -> Segmentation {
        Segmentation::new(word.len())
    }

    #[test]
    fn test_mb_is_rejoined() {
        with_ctx("climb", |ctx| {
            let mut seg = single("climb");
            seg.insert(4);
            rejoin_trailing_mb(ctx, &mut seg);
            assert!(seg.is_single());
        });
    }

    #[test]
    fn test_touch_up_inserts_missing_boundary() {
        with_ctx("slowness", |ctx| {
            let mut seg = single("slowness");
            touch_up_suffix(ctx, &mut seg);
            assert_eq!(seg.cuts(), &[4]);
        });
    }

    #[test]
    fn test_touch_up_guards() {
        // no vowel left of the cut
        with_ctx("happy", |ctx| {
            let mut seg = single("happy");
            seg.insert(3);
            touch_up_suffix(ctx, &mut seg);
            assert_eq!(seg.cuts(), &[3]);
        });
        // inside a vowel team
        with_ctx("monkey", |ctx| {
            let mut seg = single("monkey");
            touch_up_suffix(ctx, &mut seg);
            assert!(seg.is_single());
        });
        // consonant onset of a vowel-initial suffix
        with_ctx("enter", |ctx| {
            let mut seg = single("enter");
            touch_up_suffix(ctx, &mut seg);
            assert!(seg.is_single());
        });
    }

    #[test]
    fn test_fallback_suffix() {
        with_ctx("played", |ctx| {
            let mut seg = single("played");
            assert!(affix_fallback(&Cascade::default(), ctx, &mut seg));
            assert_eq!(seg.cuts(), &[4]);
        });
    }

    #[test]
    fn test_fallback_prefix() {
        with_ctx("outsmart", |ctx| {
            let mut seg = single("outsmart");
            assert!(affix_fallback(&Cascade::default(), ctx, &mut seg));
            assert_eq!(seg.cuts(), &[3]);
        });
    }

    #[test]
    fn test_fallback_gives_up() {
        with_ctx("cake", |ctx| {
            let mut seg = single("cake");
            assert!(!affix_fallback(&Cascade::default(), ctx, &mut seg));
            assert!(seg.is_single());
        });
        // "ly" would leave nothing with a vowel in front
        with_ctx("fly", |ctx| {
            let mut seg = single("fly");
            assert!(!affix_fallback(&Cascade::default(), ctx, &mut seg));
        });
    }

    #[test]
    fn test_disabled_steps() {
        with_ctx("played", |ctx| {
            let mut seg = single("played");
            let post = PostProcessor::new(false, false);
            assert!(!post.apply(&Cascade::default(), ctx, &mut seg));
            assert!(seg.is_single());
        });
    }
}
