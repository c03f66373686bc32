//! Pattern tables for the segmentation cascade
//!
//! All tables are static, read-only and shared by every segmenter.

pub mod catalog;
pub mod english;

pub use catalog::{Catalog, CatalogKind};

/// The full set of catalogs consulted by the cascade
#[derive(Debug, Clone, Copy)]
pub struct PatternTables {
    pub vowel_teams: &'static Catalog,
    pub r_controlled_trigrams: &'static Catalog,
    pub r_controlled_digrams: &'static Catalog,
    pub consonant_digraphs: &'static Catalog,
    pub consonant_trigraphs: &'static Catalog,
    pub word_families: &'static Catalog,
    pub special_initials: &'static Catalog,
    pub final_stable: &'static Catalog,
    pub strong_prefixes: &'static Catalog,
    pub prefixes: &'static Catalog,
    pub suffixes: &'static Catalog,
    pub boundary_suffixes: &'static Catalog,
    pub compound_words: &'static [(&'static str, &'static str)],
}

static ENGLISH: PatternTables = PatternTables {
    vowel_teams: &english::VOWEL_TEAMS,
    r_controlled_trigrams: &english::R_CONTROLLED_TRIGRAMS,
    r_controlled_digrams: &english::R_CONTROLLED_DIGRAMS,
    consonant_digraphs: &english::CONSONANT_DIGRAPHS,
    consonant_trigraphs: &english::CONSONANT_TRIGRAPHS,
    word_families: &english::WORD_FAMILIES,
    special_initials: &english::SPECIAL_INITIALS,
    final_stable: &english::FINAL_STABLE,
    strong_prefixes: &english::STRONG_PREFIXES,
    prefixes: &english::PREFIXES,
    suffixes: &english::SUFFIXES,
    boundary_suffixes: &english::BOUNDARY_SUFFIXES,
    compound_words: english::COMPOUND_WORDS,
};

impl PatternTables {
    /// The English tables
    pub fn english() -> &'static PatternTables {
        &ENGLISH
    }

    /// Every catalog, in cascade precedence order
    pub fn catalogs(&self) -> [&'static Catalog; 12] {
        [
            self.special_initials,
            self.consonant_trigraphs,
            self.r_controlled_trigrams,
            self.consonant_digraphs,
            self.vowel_teams,
            self.r_controlled_digrams,
            self.word_families,
            self.final_stable,
            self.strong_prefixes,
            self.prefixes,
            self.suffixes,
            self.boundary_suffixes,
        ]
    }

    /// Scan catalogs that contain `key`
    ///
    /// Exception overrides can only target these units.
    pub fn scan_kinds_of(&self, key: &str) -> Vec<CatalogKind> {
        self.catalogs()
            .iter()
            .filter(|c| c.kind().is_scan_unit() && c.contains(key))
            .map(|c| c.kind())
            .collect()
    }

    /// Whether `key` names a unit the scan can treat as atomic
    pub fn is_scan_unit(&self, key: &str) -> bool {
        !self.scan_kinds_of(key).is_empty()
    }

    /// Find the compound whose halves concatenate to `word`
    pub fn compound_split(&self, word: &[u8]) -> Option<usize> {
        self.compound_words.iter().find_map(|(head, tail)| {
            let split = head.len();
            (word.len() == split + tail.len()
                && word[..split].eq_ignore_ascii_case(head.as_bytes())
                && word[split..].eq_ignore_ascii_case(tail.as_bytes()))
            .then_some(split)
        })
    }
}
