//! Buffer segmentation for tree construction

/// Split `data` into non-overlapping segments of at most `segment_size`
/// bytes.
///
/// Segments are returned in buffer order. The final segment takes
/// whatever bytes remain and is never padded out. An empty buffer yields
/// no segments; otherwise the segment count is `len(data)` divided by
/// `segment_size`, rounded up.
///
/// `segment_size` must be at least 1; [`MerkleTree::new`] checks this
/// before calling.
///
/// [`MerkleTree::new`]: crate::MerkleTree::new
pub fn chop(data: &[u8], segment_size: usize) -> Vec<&[u8]> {
    debug_assert!(segment_size > 0);
    data.chunks(segment_size).collect()
}
