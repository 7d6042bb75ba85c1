//! Error types for post storage operations

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by the post repository
#[derive(Error, Debug)]
pub enum PostError {
    /// A stored post has a missing or unusable metadata header
    #[error("{path:?} has bad metadata: {reason}")]
    InvalidMetadata { path: PathBuf, reason: String },

    /// No post is stored under the requested slug
    #[error("Post not found: {slug}")]
    NotFound { slug: String },

    /// The slug cannot be used to address a file in the posts directory
    #[error("Invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: &'static str },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PostError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        PostError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn metadata(path: &Path, reason: impl Into<String>) -> Self {
        PostError::InvalidMetadata {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Whether the error means the requested post does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostError::NotFound { .. })
    }
}

/// Result alias used across the content module
pub type Result<T> = std::result::Result<T, PostError>;
