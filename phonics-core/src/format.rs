//! Rendering a segmentation onto the caller's original word

use crate::cascade::Segmentation;

/// Separator placed between segments
pub const SEPARATOR: char = '-';

/// Join the segments of `original` with hyphens
///
/// Segments are cut from `original` itself, so the casing the caller used
/// is kept. A single segment returns `original` unchanged, as does a
/// segmentation that does not fit `original`.
pub fn format(original: &str, segmentation: &Segmentation) -> String {
    if segmentation.is_single() {
        return original.to_string();
    }

    match segmentation.pieces(original) {
        Some(pieces) => join(&pieces),
        None => original.to_string(),
    }
}

/// Join pieces with [`SEPARATOR`]
pub fn join(pieces: &[&str]) -> String {
    let len = pieces.iter().map(|p| p.len()).sum::<usize>() + pieces.len().saturating_sub(1);
    let mut out = String::with_capacity(len);
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(piece);
    }
    out
}
