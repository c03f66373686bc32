//! Extraction rules
//!
//! Each rule looks at a span of the lowercase word and either leaves it alone
//! or fixes one segment at an edge of it. Rules never look outside the span
//! they are given.

use super::{RuleContext, Stage};

/// How an extraction rule divides a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// `span[at..]` is a fixed trailing unit; the head is segmented again
    Tail(usize),
    /// `span[..at]` is a fixed leading unit; the remainder is a base word
    Head(usize),
    /// Both halves are fixed
    Pair(usize),
    /// The whole span is one stable unit
    Whole,
}

/// One stage of the cascade, tried in priority order
pub trait ExtractionRule: Send + Sync {
    /// The stage reported when this rule fires
    fn stage(&self) -> Stage;

    /// Try the rule on `span`, a lowercase slice of the word in `ctx`
    fn extract(&self, span: &[u8], ctx: &RuleContext<'_>) -> Option<Extraction>;
}

/// Known compounds split into their two halves
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundRule;

impl ExtractionRule for CompoundRule {
    fn stage(&self) -> Stage {
        Stage::Compound
    }

    fn extract(&self, span: &[u8], ctx: &RuleContext<'_>) -> Option<Extraction> {
        ctx.tables().compound_split(span).map(Extraction::Pair)
    }
}

/// Endings that always form their own syllable (`-tion`, `-ble`, `-le`)
///
/// Endings are tried longest-first. An ending applies when something with a
/// vowel is left in front of it; the bare `le` also needs a consonant right
/// before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalStableRule;

impl ExtractionRule for FinalStableRule {
    fn stage(&self) -> Stage {
        Stage::FinalStable
    }

    fn extract(&self, span: &[u8], ctx: &RuleContext<'_>) -> Option<Extraction> {
        let tables = ctx.tables();
        let classifier = ctx.classifier();

        for ending in tables.final_stable.suffixes_of(span) {
            let at = span.len() - ending.len();
            if at == 0 {
                continue;
            }

            let head = &span[..at];
            if !classifier.has_vowel_in(head, 0, at) {
                continue;
            }
            if ending == "le" && !classifier.is_consonant_at(span, at - 1) {
                continue;
            }
            if !ctx.cut_is_legal(span, at) {
                continue;
            }

            return Some(Extraction::Tail(at));
        }

        None
    }
}

/// Prefixes stripped before anything else is decided
#[derive(Debug, Clone, Copy, Default)]
pub struct StrongPrefixRule;

impl ExtractionRule for StrongPrefixRule {
    fn stage(&self) -> Stage {
        Stage::StrongPrefix
    }

    fn extract(&self, span: &[u8], ctx: &RuleContext<'_>) -> Option<Extraction> {
        for prefix in ctx.tables().strong_prefixes.prefixes_of(span) {
            let at = prefix.len();
            let rest = &span[at..];

            if rest.is_empty() || !rest.iter().all(u8::is_ascii_alphabetic) {
                continue;
            }
            if !ctx.classifier().has_vowel_in(rest, 0, rest.len()) {
                continue;
            }
            if !ctx.cut_is_legal(span, at) {
                continue;
            }

            return Some(Extraction::Head(at));
        }

        None
    }
}

/// Consonant, vowel, consonant, silent `e` at the end of the span
///
/// The four letters stay together. When nothing with a vowel precedes them
/// the whole span is one unit (`cake`, `strike`). A consonant digraph or
/// trigraph ending in the leading consonant is pulled into the unit
/// (`ma-chine`, `en-shrine`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicERule;

impl ExtractionRule for MagicERule {
    fn stage(&self) -> Stage {
        Stage::MagicE
    }

    fn extract(&self, span: &[u8], ctx: &RuleContext<'_>) -> Option<Extraction> {
        let n = span.len();
        if n < 4 || span[n - 1] != b'e' {
            return None;
        }

        let c = ctx.classifier();
        let onset = n - 4;
        let cvc = c.is_consonant_at(span, onset)
            && c.is_vowel_at(span, onset + 1)
            && c.is_consonant_at(span, onset + 2);
        if !cvc {
            return None;
        }

        let mut at = onset;
        while let Some(start) = ctx.consonant_unit_across(span, at) {
            at = start;
        }

        if at == 0 || !c.has_vowel_in(&span[..at], 0, at) {
            return Some(Extraction::Whole);
        }
        if !ctx.cut_is_legal(span, at) && !(at < onset && team_ends_at(span, at, ctx)) {
            return None;
        }

        Some(Extraction::Tail(at))
    }
}

/// Whether a vowel team ends on `span[at]`, the letter it shares with the
/// consonant unit that starts there (`aw` + `wh` in `awhile`)
fn team_ends_at(span: &[u8], at: usize, ctx: &RuleContext<'_>) -> bool {
    ctx.tables()
        .vowel_teams
        .straddling(span, at)
        .is_some_and(|(team, start)| start + team.len() == at + 1)
}
