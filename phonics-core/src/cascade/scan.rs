//! Left-to-right scan
//!
//! Walks a span once, keeping the start of the segment being built and
//! whether it already holds a vowel. At each position the longest catalog
//! unit of the highest-precedence catalog is consumed whole; bare consonants
//! decide the VC/CV and VCCV boundaries.

use std::ops::Range;

use crate::exceptions::Directive;

use super::{RuleContext, Segmentation};

/// Scan `span` of the word in `ctx`, adding boundaries to `out`
pub fn scan(ctx: &RuleContext<'_>, span: Range<usize>, out: &mut Segmentation) {
    let mut scanner = Scanner {
        ctx,
        word: &ctx.bytes()[span.clone()],
        base: span.start,
        out,
        pos: 0,
        seg_start: 0,
        has_vowel: false,
    };

    while scanner.pos < scanner.word.len() {
        scanner.step();
    }
}

struct Scanner<'c, 'a, 'o> {
    ctx: &'c RuleContext<'a>,
    word: &'a [u8],
    base: usize,
    out: &'o mut Segmentation,
    pos: usize,
    seg_start: usize,
    has_vowel: bool,
}

impl Scanner<'_, '_, '_> {
    fn step(&mut self) {
        let tables = self.ctx.tables();
        let i = self.pos;

        // a. word-initial special digraph
        if i == 0 {
            if let Some(unit) = tables.special_initials.match_longest_at(self.word, 0) {
                match self.ctx.directive(unit) {
                    Some(Directive::Split) => self.split_first(),
                    _ => self.absorb(unit.len()),
                }
                return;
            }
        }

        // b. consonant trigraph, its own segment at the start of the word
        if let Some(unit) = tables.consonant_trigraphs.match_longest_at(self.word, i) {
            match self.ctx.directive(unit) {
                Some(Directive::Split) => self.split_first(),
                Some(Directive::Merge) => self.absorb(unit.len()),
                None => {
                    self.absorb(unit.len());
                    if i == 0 {
                        self.close();
                    }
                }
            }
            return;
        }

        // c. r-controlled trigram
        if let Some(unit) = tables.r_controlled_trigrams.match_longest_at(self.word, i) {
            if self.take_rime(unit) {
                return;
            }
        }

        // d. consonant digraph, an onset when a vowel follows
        if let Some(unit) = tables.consonant_digraphs.match_longest_at(self.word, i) {
            match self.ctx.directive(unit) {
                Some(Directive::Split) => self.split_first(),
                Some(Directive::Merge) => self.absorb(unit.len()),
                None => {
                    if self.has_vowel && self.vowel_at(i + unit.len()) {
                        self.close();
                    }
                    self.absorb(unit.len());
                }
            }
            return;
        }

        // e. vowel team
        if let Some(unit) = tables.vowel_teams.match_longest_at(self.word, i) {
            match self.ctx.directive(unit) {
                Some(Directive::Split) => self.split_first(),
                _ => self.absorb(unit.len()),
            }
            return;
        }

        // f. r-controlled digram
        if let Some(unit) = tables.r_controlled_digrams.match_longest_at(self.word, i) {
            if self.take_rime(unit) {
                return;
            }
        }

        // g. word family
        if let Some(unit) = tables.word_families.match_longest_at(self.word, i) {
            if self.take_rime(unit) {
                return;
            }
        }

        // h. single vowel
        if self.vowel_at(i) {
            self.absorb(1);
            return;
        }

        // i. single consonant
        let classifier = self.ctx.classifier();
        if classifier.is_consonant_at(self.word, i) && self.has_vowel {
            if self.vowel_at(i + 1) {
                // VC/CV
                self.close();
                self.absorb(1);
                return;
            }
            if i > 0
                && self.vowel_at(i - 1)
                && classifier.is_consonant_at(self.word, i + 1)
                && self.vowel_at(i + 2)
            {
                // VCCV
                self.absorb(1);
                self.close();
                return;
            }
        }

        self.absorb(1);
    }

    /// Units that only hold together when no vowel follows them
    ///
    /// Returns `false` when the unit does not apply at the cursor.
    fn take_rime(&mut self, unit: &'static str) -> bool {
        match self.ctx.directive(unit) {
            Some(Directive::Split) => self.split_first(),
            Some(Directive::Merge) => self.absorb(unit.len()),
            None if self.vowel_at(self.pos + unit.len()) => return false,
            None => self.absorb(unit.len()),
        }
        true
    }

    fn vowel_at(&self, i: usize) -> bool {
        self.ctx.classifier().is_vowel_at(self.word, i)
    }

    fn absorb(&mut self, len: usize) {
        let end = (self.pos + len).min(self.word.len());
        if !self.has_vowel {
            self.has_vowel = self.ctx.classifier().has_vowel_in(self.word, self.pos, end);
        }
        self.pos = end;
    }

    /// Consume one letter of an overridden unit and end the segment there
    fn split_first(&mut self) {
        self.absorb(1);
        self.close();
    }

    /// End the current segment at the cursor
    fn close(&mut self) {
        if self.pos > self.seg_start && self.pos < self.word.len() {
            self.out.insert(self.base + self.pos);
            self.seg_start = self.pos;
            self.has_vowel = false;
        }
    }
}
