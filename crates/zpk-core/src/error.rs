//! Error types for zpk construction and access

use thiserror::Error;

/// Errors raised while building or indexing zpk systems
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZpkError {
    /// Malformed shape, width, count or root data
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Index outside of the matrix (or selection) bounds, negative included
    #[error("Index {index} is not in the allowed range of {axis} (0..{len})")]
    OutOfRange {
        axis: &'static str,
        index: isize,
        len: usize,
    },
}

impl ZpkError {
    /// Shorthand for building an `InvalidArgument` error
    pub fn invalid(message: impl Into<String>) -> Self {
        ZpkError::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ZpkError>;
