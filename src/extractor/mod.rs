// src/extractor/mod.rs

// --- Declare sub-modules ---
pub mod fields;

// Re-export the dispatch entry point
pub use fields::resolve_field_name;

use crate::common::sentence::{FieldIndex, SentenceId, FIELD_SEPARATOR, SENTENCE_TERMINATOR};

/// Returns the requested field of the first matching sentence as a slice
/// borrowed from `buffer`.
///
/// The scan:
/// 1. locates the first substring match of `id` in `buffer`;
/// 2. requires a sentence terminator (CR) somewhere after the match — a
///    match with no terminator is still streaming in and is treated the
///    same as no match;
/// 3. walks `index` field separators forward, never past the terminator,
///    so a following sentence can never satisfy an over-large index;
/// 4. returns the bytes between that separator and the next one (or the
///    terminator for the final field).
///
/// Index 0 addresses the tag region itself; index 1 is the first value
/// field. An empty field (two adjacent separators) yields an empty slice.
/// A `*hh` checksum suffix is part of the final field: this crate neither
/// validates nor strips checksums.
///
/// If `id` occurs more than once (several sentences collected in one
/// cycle), the first occurrence wins — a deliberate, deterministic policy,
/// not an accident of the scan order.
pub fn field_slice<'b>(
    buffer: &'b [u8],
    id: SentenceId<'_>,
    index: FieldIndex,
) -> Option<&'b [u8]> {
    let tag = id.as_bytes();
    if buffer.len() < tag.len() {
        return None;
    }

    let start = buffer.windows(tag.len()).position(|w| w == tag)?;
    let term = buffer[start..]
        .iter()
        .position(|&b| b == SENTENCE_TERMINATOR)?;
    let sentence = &buffer[start..start + term];

    let mut pos = 0;
    for _ in 0..index.as_usize() {
        let sep = sentence[pos..]
            .iter()
            .position(|&b| b == FIELD_SEPARATOR)?;
        pos += sep + 1;
    }
    let end = sentence[pos..]
        .iter()
        .position(|&b| b == FIELD_SEPARATOR)
        .map_or(sentence.len(), |sep| pos + sep);

    Some(&sentence[pos..end])
}

/// Copies the requested field of the first matching sentence into `out`.
///
/// `out` is zeroed before scanning, so a failed call never leaves partial
/// state behind. On success the copied length is returned; a field longer
/// than `out` is truncated silently to `out.len()`. Callers that must see
/// the whole field should size `out` at
/// [`timing::MAX_SENTENCE_LEN`](crate::common::timing::MAX_SENTENCE_LEN)
/// or use [`field_slice`]. An empty field yields `Some(0)`.
///
/// Returns `None` when the sentence is absent or truncated, or when it has
/// fewer than `index` fields. The caller cannot tell those cases apart and
/// is expected to retry with the next cycle's buffer. See [`field_slice`]
/// for the scan rules.
pub fn extract_field(
    buffer: &[u8],
    id: SentenceId<'_>,
    index: FieldIndex,
    out: &mut [u8],
) -> Option<usize> {
    out.fill(0);
    let field = field_slice(buffer, id, index)?;
    let copied = field.len().min(out.len());
    out[..copied].copy_from_slice(&field[..copied]);
    Some(copied)
}

/// Owned-copy variant of [`extract_field`] (requires the 'alloc' feature).
/// No truncation: the whole field is returned.
#[cfg(feature = "alloc")]
pub fn extract_field_vec(
    buffer: &[u8],
    id: SentenceId<'_>,
    index: FieldIndex,
) -> Option<alloc::vec::Vec<u8>> {
    field_slice(buffer, id, index).map(|field| field.to_vec())
}

/// Bounded owned-copy variant of [`extract_field`] (requires the
/// 'use_heapless' feature). A field longer than `N` is truncated silently,
/// matching [`extract_field`].
#[cfg(feature = "use_heapless")]
pub fn extract_field_heapless<const N: usize>(
    buffer: &[u8],
    id: SentenceId<'_>,
    index: FieldIndex,
) -> Option<heapless::Vec<u8, N>> {
    let field = field_slice(buffer, id, index)?;
    let take = field.len().min(N);
    let mut out = heapless::Vec::new();
    // Cannot fail: `take` is bounded by N.
    let _ = out.extend_from_slice(&field[..take]);
    Some(out)
}
