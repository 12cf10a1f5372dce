//! Error types for the favmerge core library
//!
//! Every variant aborts the whole discovery pass. The collector never recovers
//! from any of them locally and never returns a partial grouping.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, CollectError>;

/// Error type for path collection
#[derive(Error, Debug)]
pub enum CollectError {
    /// An input path does not exist (or is neither a directory nor a regular file)
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An input path is a regular file that does not match the candidate pattern
    #[error("Not an XMP file: {}", .0.display())]
    InvalidFormat(PathBuf),

    /// Every input path was valid but no candidate file was found
    #[error("No XMP files found")]
    EmptyResult,

    /// Listing a directory failed while walking an input path
    #[error("Failed to read directory under {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The candidate glob could not be compiled
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),
}

impl CollectError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound(path) | Self::InvalidFormat(path) => Some(path),
            Self::Io { path, .. } => Some(path),
            Self::EmptyResult | Self::InvalidPattern(_) => None,
        }
    }

    /// Whether the error was caused by the filesystem rather than by the input list
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::InvalidFormat(_) | Self::Io { .. }
        )
    }
}
