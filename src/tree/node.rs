//! Tree node types

use digest::{Digest, Output};
use std::fmt;

/// A node in the merkle tree
///
/// A leaf wraps the digest of exactly one buffer segment; an internal
/// node wraps the digest of its two children's concatenated digests.
/// Digests are finalized when the node is built and never change
/// afterward.
pub enum Node<D: Digest> {
    /// A childless node covering one segment
    Leaf {
        /// Digest of the segment's raw bytes
        digest: Output<D>,
    },
    /// A node with exactly two children
    Internal {
        /// Digest of `left.digest || right.digest`
        digest: Output<D>,
        left: Box<Node<D>>,
        right: Box<Node<D>>,
    },
}

impl<D: Digest> Node<D> {
    /// Build a leaf over one segment
    pub fn leaf(segment: &[u8]) -> Self {
        let mut hasher = D::new();
        hasher.update(segment);
        Node::Leaf {
            digest: hasher.finalize(),
        }
    }

    /// Build an internal node over two finished subtrees
    pub fn internal(left: Node<D>, right: Node<D>) -> Self {
        let mut hasher = D::new();
        hasher.update(left.digest());
        hasher.update(right.digest());
        Node::Internal {
            digest: hasher.finalize(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The node's finalized digest bytes
    pub fn digest(&self) -> &[u8] {
        match self {
            Node::Leaf { digest } => digest.as_slice(),
            Node::Internal { digest, .. } => digest.as_slice(),
        }
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn children(&self) -> Option<(&Node<D>, &Node<D>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// Lock-step structural comparison of two subtrees.
    ///
    /// At every position both nodes must agree on digest bytes and on
    /// having children; both children are walked even when the digests
    /// at this level already differ.
    pub(crate) fn subtree_equals(&self, other: &Node<D>) -> bool {
        let digests_match = self.digest() == other.digest();
        match (self.children(), other.children()) {
            (None, None) => digests_match,
            (Some((sl, sr)), Some((ol, or))) => {
                let left = sl.subtree_equals(ol);
                let right = sr.subtree_equals(or);
                digests_match && left && right
            }
            _ => false,
        }
    }

    /// Write a depth-first (node, left, right) dump with indentation
    /// proportional to depth.
    pub(crate) fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        writeln!(f, "hash: {}", hex::encode(self.digest()))?;
        if let Some((left, right)) = self.children() {
            left.write_indented(f, depth + 1)?;
            right.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}
