//! Offset-based segmentation of a word

use std::ops::Range;

use smallvec::SmallVec;

/// A word split into contiguous, non-empty segments
///
/// Stored as the sorted interior cut offsets; the segments are the spans
/// between consecutive cuts. Concatenating the segments always yields the
/// word, because a cut can only be placed strictly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    len: usize,
    cuts: SmallVec<[usize; 8]>,
}

impl Segmentation {
    /// A single segment covering `len` bytes
    pub fn new(len: usize) -> Self {
        Self {
            len,
            cuts: SmallVec::new(),
        }
    }

    /// Length of the segmented word in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the segmented word is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Interior cut offsets, ascending
    pub fn cuts(&self) -> &[usize] {
        &self.cuts
    }

    /// Number of segments
    pub fn segment_count(&self) -> usize {
        self.cuts.len() + 1
    }

    /// No cuts at all
    pub fn is_single(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Check for a cut at `pos`
    pub fn has_cut(&self, pos: usize) -> bool {
        self.cuts.binary_search(&pos).is_ok()
    }

    /// Add a cut at `pos`
    ///
    /// Returns `false` when `pos` is not strictly inside the word or the cut
    /// already exists.
    pub fn insert(&mut self, pos: usize) -> bool {
        if pos == 0 || pos >= self.len {
            return false;
        }
        match self.cuts.binary_search(&pos) {
            Ok(_) => false,
            Err(idx) => {
                self.cuts.insert(idx, pos);
                true
            }
        }
    }

    /// Remove the cut at `pos`, if any
    pub fn remove(&mut self, pos: usize) -> bool {
        match self.cuts.binary_search(&pos) {
            Ok(idx) => {
                self.cuts.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Byte ranges of the segments, in order
    pub fn spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let starts = std::iter::once(0).chain(self.cuts.iter().copied());
        let ends = self.cuts.iter().copied().chain(std::iter::once(self.len));
        starts.zip(ends).map(|(start, end)| start..end)
    }

    /// The segment that contains byte `pos`
    pub fn piece_containing(&self, pos: usize) -> Range<usize> {
        let idx = self.cuts.partition_point(|&c| c <= pos);
        let start = if idx == 0 { 0 } else { self.cuts[idx - 1] };
        let end = self.cuts.get(idx).copied().unwrap_or(self.len);
        start..end
    }

    /// Slice `word` into its segments
    ///
    /// Returns `None` if `word` does not have the segmented length or a cut
    /// is not on a char boundary.
    pub fn pieces<'w>(&self, word: &'w str) -> Option<Vec<&'w str>> {
        if word.len() != self.len {
            return None;
        }
        self.spans().map(|span| word.get(span)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut seg = Segmentation::new(9);
        assert!(seg.insert(6));
        assert!(seg.insert(2));
        assert!(seg.insert(4));
        assert_eq!(seg.cuts(), &[2, 4, 6]);
        assert_eq!(seg.segment_count(), 4);
    }

    #[test]
    fn test_insert_rejects_edges_and_duplicates() {
        let mut seg = Segmentation::new(4);
        assert!(!seg.insert(0));
        assert!(!seg.insert(4));
        assert!(!seg.insert(10));
        assert!(seg.insert(2));
        assert!(!seg.insert(2));
        assert_eq!(seg.cuts(), &[2]);
    }

    #[test]
    fn test_remove() {
        let mut seg = Segmentation::new(5);
        seg.insert(4);
        assert!(seg.has_cut(4));
        assert!(seg.remove(4));
        assert!(!seg.remove(4));
        assert!(seg.is_single());
    }

    #[test]
    fn test_spans_cover_word() {
        let mut seg = Segmentation::new(6);
        seg.insert(3);
        let spans: Vec<_> = seg.spans().collect();
        assert_eq!(spans, vec![0..3, 3..6]);

        let single: Vec<_> = Segmentation::new(4).spans().collect();
        assert_eq!(single, vec![0..4]);
    }

    #[test]
    fn test_piece_containing() {
        let mut seg = Segmentation::new(9);
        seg.insert(3);
        seg.insert(6);
        assert_eq!(seg.piece_containing(0), 0..3);
        assert_eq!(seg.piece_containing(3), 3..6);
        assert_eq!(seg.piece_containing(5), 3..6);
        assert_eq!(seg.piece_containing(8), 6..9);
    }

    #[test]
    fn test_pieces() {
        let mut seg = Segmentation::new(6);
        seg.insert(3);
        assert_eq!(seg.pieces("Rabbit"), Some(vec!["Rab", "bit"]));
        assert_eq!(seg.pieces("rabbits"), None);
    }
}
