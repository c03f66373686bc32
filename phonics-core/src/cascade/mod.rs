//! The segmentation rule cascade
//!
//! A word is segmented by trying the extraction rules in priority order and
//! falling back to the left-to-right scan when none of them fires. Every
//! extraction fixes one segment and recurses on a strictly shorter span, so
//! the recursion is bounded by the word length.
//!
//! Residual spans recurse in one of two ways:
//! - a head left in front of a fixed trailing unit goes through the full
//!   cascade (extraction, then the scan);
//! - the remainder after a stripped prefix is treated as a base word and only
//!   goes through the extraction rules, it is never scanned.

pub mod postprocess;
pub mod rules;
pub mod scan;
pub mod segmentation;

use std::fmt;
use std::ops::Range;

use log::trace;
use serde::Serialize;

use crate::classifier::LetterClassifier;
use crate::exceptions::{Directive, ExceptionRegistry};
use crate::tables::PatternTables;

pub use rules::{
    CompoundRule, Extraction, ExtractionRule, FinalStableRule, MagicERule, StrongPrefixRule,
};
pub use segmentation::Segmentation;

/// The cascade stage that decided a word's top-level split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Too short to segment
    Passthrough,
    /// Known compound word
    Compound,
    /// Final-stable ending extraction
    FinalStable,
    /// Strong prefix stripping
    StrongPrefix,
    /// Magic-e extraction
    MagicE,
    /// Left-to-right scan
    Scan,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Passthrough => "passthrough",
            Stage::Compound => "compound",
            Stage::FinalStable => "final-stable",
            Stage::StrongPrefix => "strong-prefix",
            Stage::MagicE => "magic-e",
            Stage::Scan => "scan",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the cascade consults while segmenting one word
pub struct RuleContext<'a> {
    word: &'a str,
    tables: &'static PatternTables,
    classifier: &'a dyn LetterClassifier,
    registry: &'a ExceptionRegistry,
}

impl<'a> RuleContext<'a> {
    /// `word` must already be lowercase
    pub fn new(
        word: &'a str,
        tables: &'static PatternTables,
        classifier: &'a dyn LetterClassifier,
        registry: &'a ExceptionRegistry,
    ) -> Self {
        Self {
            word,
            tables,
            classifier,
            registry,
        }
    }

    /// The whole lowercase word
    pub fn word(&self) -> &'a str {
        self.word
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.word.as_bytes()
    }

    pub fn tables(&self) -> &'static PatternTables {
        self.tables
    }

    pub fn classifier(&self) -> &'a dyn LetterClassifier {
        self.classifier
    }

    /// Exception override for a catalog unit, matched against the whole word
    pub fn directive(&self, key: &str) -> Option<Directive> {
        self.registry.resolve(self.word, key)
    }

    /// Whether a boundary may be placed at `pos` in `span`
    ///
    /// A cut inside a vowel team, a consonant digraph or a consonant
    /// trigraph is only legal when that unit is registered as force-split
    /// for this word.
    pub fn cut_is_legal(&self, span: &[u8], pos: usize) -> bool {
        let team_ok = match self.tables.vowel_teams.straddling(span, pos) {
            Some((team, _)) => self.registry.should_split(self.word, team),
            None => true,
        };
        team_ok && self.consonant_unit_across(span, pos).is_none()
    }

    /// Start of the consonant trigraph or digraph a cut at `pos` would break
    ///
    /// Units force-split for this word are ignored.
    pub fn consonant_unit_across(&self, span: &[u8], pos: usize) -> Option<usize> {
        [self.tables.consonant_trigraphs, self.tables.consonant_digraphs]
            .into_iter()
            .filter_map(|catalog| catalog.straddling(span, pos))
            .find(|(unit, _)| !self.registry.should_split(self.word, unit))
            .map(|(_, start)| start)
    }
}

/// Ordered extraction rules plus the scan
pub struct Cascade {
    rules: Vec<Box<dyn ExtractionRule>>,
}

impl fmt::Debug for Cascade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cascade")
            .field("rules", &self.rule_names())
            .finish()
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Cascade {
    /// The English rule order, optionally led by compound splitting
    pub fn new(compound_words: bool) -> Self {
        let mut rules: Vec<Box<dyn ExtractionRule>> = Vec::with_capacity(4);
        if compound_words {
            rules.push(Box::new(CompoundRule));
        }
        rules.push(Box::new(FinalStableRule));
        rules.push(Box::new(StrongPrefixRule));
        rules.push(Box::new(MagicERule));
        Self { rules }
    }

    /// Build a cascade from an explicit rule list
    pub fn with_rules(rules: Vec<Box<dyn ExtractionRule>>) -> Self {
        Self { rules }
    }

    /// Names of the extraction rules, in the order they are tried
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.stage().as_str()).collect()
    }

    /// Segment the whole word held by `ctx`
    pub fn run(&self, ctx: &RuleContext<'_>) -> (Segmentation, Stage) {
        let mut out = Segmentation::new(ctx.bytes().len());
        let stage = self.segment(ctx, 0..ctx.bytes().len(), &mut out);
        (out, stage)
    }

    /// Full cascade over `span`: extraction rules, then the scan
    pub fn segment(
        &self,
        ctx: &RuleContext<'_>,
        span: Range<usize>,
        out: &mut Segmentation,
    ) -> Stage {
        if span.len() < 2 {
            return Stage::Passthrough;
        }
        if let Some(stage) = self.extract(ctx, span.clone(), out) {
            return stage;
        }

        trace!("scan {:?}", ctx.word.get(span.clone()));
        scan::scan(ctx, span, out);
        Stage::Scan
    }

    /// Extraction rules only over `span`
    ///
    /// Returns the stage that fired, or `None` when the span is left as is.
    pub fn extract(
        &self,
        ctx: &RuleContext<'_>,
        span: Range<usize>,
        out: &mut Segmentation,
    ) -> Option<Stage> {
        if span.len() < 2 {
            return None;
        }

        let base = span.start;
        let slice = &ctx.bytes()[span.clone()];
        for rule in &self.rules {
            let Some(extraction) = rule.extract(slice, ctx) else {
                continue;
            };
            trace!(
                "{} on {:?}: {:?}",
                rule.stage(),
                ctx.word.get(span.clone()),
                extraction
            );

            match extraction {
                Extraction::Tail(at) => {
                    out.insert(base + at);
                    self.segment(ctx, base..base + at, out);
                }
                Extraction::Head(at) => {
                    out.insert(base + at);
                    self.extract(ctx, base + at..span.end, out);
                }
                Extraction::Pair(at) => {
                    out.insert(base + at);
                }
                Extraction::Whole => {}
            }
            return Some(rule.stage());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::EnglishClassifier;

    fn cuts_of(word: &str, cascade: &Cascade) -> (Vec<usize>, Stage) {
        let registry = ExceptionRegistry::builtin();
        let ctx = RuleContext::new(word, PatternTables::english(), &EnglishClassifier, registry);
        let (seg, stage) = cascade.run(&ctx);
        (seg.cuts().to_vec(), stage)
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            Cascade::default().rule_names(),
            vec!["final-stable", "strong-prefix", "magic-e"]
        );
        assert_eq!(Cascade::new(true).rule_names()[0], "compound");
    }

    #[test]
    fn test_head_recurses_through_scan() {
        // "celeb" in front of the magic-e unit is scanned
        let (cuts, stage) = cuts_of("celebrate", &Cascade::default());
        assert_eq!(stage, Stage::MagicE);
        assert_eq!(cuts, vec![2, 5]);
    }

    #[test]
    fn test_prefix_remainder_is_not_scanned() {
        let (cuts, stage) = cuts_of("disappear", &Cascade::default());
        assert_eq!(stage, Stage::StrongPrefix);
        assert_eq!(cuts, vec![3]);
    }

    #[test]
    fn test_short_span_passthrough() {
        let (cuts, stage) = cuts_of("a", &Cascade::default());
        assert_eq!(stage, Stage::Passthrough);
        assert!(cuts.is_empty());
    }

    #[test]
    fn test_compound_rule_only_when_enabled() {
        let (cuts, stage) = cuts_of("rainbow", &Cascade::new(true));
        assert_eq!(stage, Stage::Compound);
        assert_eq!(cuts, vec![4]);

        let (_, stage) = cuts_of("rainbow", &Cascade::default());
        assert_eq!(stage, Stage::Scan);
    }

    #[test]
    fn test_cut_legality() {
        let registry = ExceptionRegistry::builtin();
        let tables = PatternTables::english();
        let ctx = RuleContext::new("reenter", tables, &EnglishClassifier, registry);
        // "ee" is force-split for this word
        assert!(ctx.cut_is_legal(b"reenter", 2));

        let ctx = RuleContext::new("monkey", tables, &EnglishClassifier, registry);
        assert!(!ctx.cut_is_legal(b"monkey", 5));
        assert!(ctx.cut_is_legal(b"monkey", 3));
    }

    #[test]
    fn test_cut_never_breaks_consonant_units() {
        let registry = ExceptionRegistry::builtin();
        let tables = PatternTables::english();

        let ctx = RuleContext::new("machine", tables, &EnglishClassifier, registry);
        assert!(!ctx.cut_is_legal(b"machine", 3));
        assert_eq!(ctx.consonant_unit_across(b"machine", 3), Some(2));
        assert!(ctx.cut_is_legal(b"machine", 2));

        // trigraphs are checked before their digraphs
        let ctx = RuleContext::new("enshrine", tables, &EnglishClassifier, registry);
        assert_eq!(ctx.consonant_unit_across(b"enshrine", 4), Some(2));

        // "sh" is force-split for this word, so the prefix cut stands
        let ctx = RuleContext::new("dishonest", tables, &EnglishClassifier, registry);
        assert!(ctx.cut_is_legal(b"dishonest", 3));

        let plain = ExceptionRegistry::new();
        let ctx = RuleContext::new("dishonest", tables, &EnglishClassifier, &plain);
        assert!(!ctx.cut_is_legal(b"dishonest", 3));
    }

    #[test]
    fn test_custom_rule_order() {
        let cascade = Cascade::with_rules(vec![Box::new(StrongPrefixRule)]);
        assert_eq!(cascade.rule_names(), vec!["strong-prefix"]);

        // without final-stable in front, the prefix decides
        let (cuts, stage) = cuts_of("disable", &cascade);
        assert_eq!(stage, Stage::StrongPrefix);
        assert_eq!(cuts, vec![3]);

        // no rule fires: the scan takes over
        let (cuts, stage) = cuts_of("rabbit", &cascade);
        assert_eq!(stage, Stage::Scan);
        assert_eq!(cuts, vec![3]);
    }
}
