//! Merkle tree over a segmented byte buffer
//!
//! - Each leaf's digest covers exactly one segment of the buffer
//! - Each internal node's digest covers its children's concatenated digests
//! - The root digest uniquely identifies the entire buffer content and layout

mod merkle;
mod node;

pub use merkle::MerkleTree;
pub use node::Node;
