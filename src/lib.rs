//! # merkle_buf
//!
//! Merkle trees over in-memory byte buffers.
//!
//! A buffer is chopped into fixed-size segments (the last one may be
//! shorter). Each leaf hashes one segment; each internal node hashes the
//! concatenation of its children's digests. The root digest commits to
//! every byte of the buffer, so any mutation is detectable with a single
//! fixed-size comparison.
//!
//! The digest algorithm is pluggable through the [`digest::Digest`]
//! trait and defaults to SHA-256.
//!
//! ## Example
//!
//! ```
//! use merkle_buf::MerkleTree;
//!
//! let tree: MerkleTree = MerkleTree::new(b"abcdefgh".to_vec(), 4)?;
//! assert_eq!(tree.root_hash()?.len(), 32);
//! assert!(tree.validate());
//! # Ok::<(), merkle_buf::Error>(())
//! ```

pub mod segment;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use tree::{MerkleTree, Node};
