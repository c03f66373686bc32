//! Static pattern catalogs with longest-first matching
//!
//! A catalog is a fixed, process-wide list of lowercase letter units. Entries
//! are stored longest-first so that the first hit of a linear scan is always
//! the longest match. Lookups never allocate.

use serde::Serialize;

/// Which role a catalog plays in the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    /// Multi-letter single vowel sounds (`oo`, `igh`)
    VowelTeam,
    /// Vowel + r units of three letters (`air`, `ore`)
    RControlledTrigram,
    /// Vowel + r units of two letters (`ar`, `er`)
    RControlledDigram,
    /// Two consonants, one sound (`ch`, `th`)
    ConsonantDigraph,
    /// Three-letter consonant units (`tch`, `str`)
    ConsonantTrigraph,
    /// Atomic rimes (`an`, `in`)
    WordFamily,
    /// Digraphs only recognised at the start of a word (`kn`, `wr`)
    SpecialInitial,
    /// Endings that always form their own syllable (`tion`, `ble`)
    FinalStable,
    /// Prefixes stripped before scanning (`dis`, `under`)
    StrongPrefix,
    /// Prefixes used by the no-boundary fallback
    Prefix,
    /// Suffixes used by the no-boundary fallback
    Suffix,
    /// Suffixes that get a forced boundary after scanning
    BoundarySuffix,
}

impl CatalogKind {
    /// Whether the left-to-right scan matches units of this kind
    ///
    /// Only these kinds can be targeted by exception overrides.
    pub fn is_scan_unit(&self) -> bool {
        matches!(
            self,
            CatalogKind::VowelTeam
                | CatalogKind::RControlledTrigram
                | CatalogKind::RControlledDigram
                | CatalogKind::ConsonantDigraph
                | CatalogKind::ConsonantTrigraph
                | CatalogKind::WordFamily
                | CatalogKind::SpecialInitial
        )
    }
}

/// An ordered, read-only catalog of letter units
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    name: &'static str,
    kind: CatalogKind,
    entries: &'static [&'static str],
}

impl Catalog {
    /// Create a catalog; `entries` must be lowercase and sorted longest-first
    pub const fn new(
        name: &'static str,
        kind: CatalogKind,
        entries: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            kind,
            entries,
        }
    }

    /// Human readable catalog name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Catalog role
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// All entries, longest first
    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    /// Case-insensitive membership check
    pub fn contains(&self, unit: &str) -> bool {
        self.entries.iter().any(|e| e.eq_ignore_ascii_case(unit))
    }

    /// Longest entry that occurs in `word` starting at byte `i`
    pub fn match_longest_at(&self, word: &[u8], i: usize) -> Option<&'static str> {
        let rest = word.get(i..)?;
        self.entries
            .iter()
            .copied()
            .find(|e| starts_with_ignore_case(rest, e.as_bytes()))
    }

    /// Longest entry the whole word ends with
    pub fn longest_suffix_of(&self, word: &[u8]) -> Option<&'static str> {
        self.suffixes_of(word).next()
    }

    /// Every entry the word ends with, longest first
    pub fn suffixes_of<'w>(&self, word: &'w [u8]) -> impl Iterator<Item = &'static str> + 'w {
        let entries: &'static [&'static str] = self.entries;
        entries
            .iter()
            .copied()
            .filter(move |e| ends_with_ignore_case(word, e.as_bytes()))
    }

    /// Every entry the word starts with, longest first
    pub fn prefixes_of<'w>(&self, word: &'w [u8]) -> impl Iterator<Item = &'static str> + 'w {
        let entries: &'static [&'static str] = self.entries;
        entries
            .iter()
            .copied()
            .filter(move |e| starts_with_ignore_case(word, e.as_bytes()))
    }

    /// Find an occurrence of an entry that straddles the cut at `pos`
    ///
    /// Returns the entry and its start when some entry occupies both
    /// `word[pos - 1]` and `word[pos]`.
    pub fn straddling(&self, word: &[u8], pos: usize) -> Option<(&'static str, usize)> {
        if pos == 0 || pos >= word.len() {
            return None;
        }

        for entry in self.entries {
            let len = entry.len();
            if len < 2 {
                continue;
            }
            let first = pos.saturating_sub(len - 1);
            for start in first..pos {
                if word
                    .get(start..start + len)
                    .is_some_and(|w| w.eq_ignore_ascii_case(entry.as_bytes()))
                {
                    return Some((entry, start));
                }
            }
        }

        None
    }
}

#[inline]
fn starts_with_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack[..needle.len()].eq_ignore_ascii_case(needle)
}

#[inline]
fn ends_with_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len()
        && haystack[haystack.len() - needle.len()..].eq_ignore_ascii_case(needle)
}
