//! Error types for DSA operations.
//!
//! This module provides a unified error type for the data structure
//! operations in this crate.

use thiserror::Error;

/// The main error type for DSA operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsaError {
    /// Index is out of bounds.
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was accessed.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// A logic precondition was violated (e.g. dereferencing a
    /// past-the-end cursor).
    #[error("{message}")]
    Logic {
        /// Description of the violated precondition.
        message: &'static str,
    },
}

/// A specialized Result type for DSA operations.
pub type Result<T> = core::result::Result<T, DsaError>;
