//! Error types for buffer operations.

use thiserror::Error;

/// Buffer operation error.
///
/// Every variant signals caller misuse rather than an internal fault, so
/// none of them carry a source error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Construction was requested with a capacity of zero.
    #[error("invalid capacity: must be greater than 0")]
    InvalidCapacity,
    /// `read` was called on a buffer with no elements.
    #[error("buffer is empty")]
    EmptyBuffer,
    /// `write` was called on a buffer holding `capacity` elements.
    #[error("buffer is full")]
    BufferFull,
}
