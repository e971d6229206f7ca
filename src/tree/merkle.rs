//! Merkle tree construction and validation

use crate::error::{Error, Result};
use crate::segment;
use crate::tree::Node;
use digest::Digest;
use sha2::Sha256;
use std::fmt;

/// A merkle tree committing to a byte buffer
///
/// The buffer is split into segments of at most `segment_size` bytes and
/// a balanced binary tree is built over them: leaves hash individual
/// segments, internal nodes hash their children's concatenated digests.
/// The buffer is retained so the tree can later be rebuilt and checked
/// against itself with [`validate`].
///
/// The digest algorithm is the type parameter `D`; it defaults to
/// SHA-256. A fresh hashing context is created per node, so any
/// [`Digest`] implementation with deterministic, fixed-length output
/// works.
///
/// Built trees are immutable: every digest is finalized during
/// construction and never rewritten.
///
/// [`validate`]: MerkleTree::validate
pub struct MerkleTree<D: Digest = Sha256> {
    /// Top node, absent for an empty buffer
    root: Option<Node<D>>,
    /// The original buffer, retained verbatim
    data: Vec<u8>,
    /// Maximum bytes per leaf segment
    segment_size: usize,
}

impl<D: Digest> MerkleTree<D> {
    /// Build a tree over `data` with leaves of at most `segment_size`
    /// bytes.
    ///
    /// The final leaf is not padded out if fewer bytes remain. An empty
    /// buffer produces a tree with no root.
    ///
    /// Returns [`Error::ZeroSegmentSize`] if `segment_size` is 0.
    pub fn new(data: Vec<u8>, segment_size: usize) -> Result<Self> {
        if segment_size == 0 {
            return Err(Error::ZeroSegmentSize);
        }

        let root = build(&segment::chop(&data, segment_size));
        Ok(MerkleTree {
            root,
            data,
            segment_size,
        })
    }

    /// The root digest bytes.
    ///
    /// Returns [`Error::EmptyTree`] if the tree was built from an empty
    /// buffer.
    pub fn root_hash(&self) -> Result<&[u8]> {
        match &self.root {
            Some(root) => Ok(root.digest()),
            None => Err(Error::EmptyTree),
        }
    }

    /// Rebuild a fresh tree from the stored buffer and check that it
    /// structurally matches this one.
    ///
    /// Detects any in-place mutation of the buffer that bypassed the
    /// tree. Never mutates `self`.
    pub fn validate(&self) -> bool {
        match Self::new(self.data.clone(), self.segment_size) {
            Ok(rebuilt) => self.equals(&rebuilt),
            Err(_) => false,
        }
    }

    /// Structural equality against another tree.
    ///
    /// Both trees are walked in lock-step (node, then left, then right);
    /// every position must be simultaneously absent in both, or present
    /// in both with matching digest bytes.
    pub fn equals(&self, other: &MerkleTree<D>) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => a.subtree_equals(b),
            (None, None) => true,
            _ => false,
        }
    }

    /// The original buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Maximum bytes per leaf segment
    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    /// Whether the tree was built from an empty buffer
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of leaves: the buffer length divided by the segment size,
    /// rounded up
    pub fn leaf_count(&self) -> usize {
        self.data.len().div_ceil(self.segment_size)
    }
}

/// Recursively build the subtree covering `segments`.
///
/// A single segment becomes a leaf; otherwise the segment range is
/// split at its midpoint and the left half is fully built before the
/// right, so leaves always take segments in buffer order. For any
/// non-empty input this yields a full binary tree, balanced to within
/// one level, with one leaf per segment.
fn build<D: Digest>(segments: &[&[u8]]) -> Option<Node<D>> {
    match segments {
        [] => None,
        [segment] => Some(Node::leaf(segment)),
        _ => {
            let mid = segments.len() / 2;
            let left = build(&segments[..mid])?;
            let right = build(&segments[mid..])?;
            Some(Node::internal(left, right))
        }
    }
}

impl<D: Digest> PartialEq for MerkleTree<D> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<D: Digest> Eq for MerkleTree<D> {}

impl<D: Digest> fmt::Display for MerkleTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MerkleTree:")?;
        writeln!(f, "data: {}", hex::encode(&self.data))?;
        writeln!(f, "segment size: {}", self.segment_size)?;
        writeln!(f, "tree:")?;
        if let Some(root) = &self.root {
            root.write_indented(f, 0)?;
        }
        Ok(())
    }
}
