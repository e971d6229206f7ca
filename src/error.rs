//! Error types for merkle_buf

use thiserror::Error;

/// Result type alias for merkle_buf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in merkle_buf operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("segment size must be at least 1")]
    ZeroSegmentSize,

    #[error("tree is empty, no root digest")]
    EmptyTree,
}
