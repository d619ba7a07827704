//! Error types for repository and storage operations.
//!
//! Binary entry points use `color_eyre::Result`; library code returns
//! [`RepoResult`] and lets callers decide how much to surface.

use thiserror::Error;

use crate::models::PostId;

/// Errors produced by a [`PostRepository`](crate::traits::PostRepository)
/// implementation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepoError {
    /// The requested post does not exist in this repository
    #[error("post not found: {0}")]
    NotFound(PostId),

    /// The backing store could not be read or written
    #[error("storage error: {0}")]
    Storage(String),

    /// Injected failure used by mock repositories in tests
    #[error("{0}")]
    Other(String),
}

/// Result alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;
