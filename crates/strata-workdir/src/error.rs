//! Error types for the workdir crate.

use std::path::PathBuf;

/// Errors that can occur while snapshotting or restoring a working directory.
#[derive(Debug, thiserror::Error)]
pub enum WorkdirError {
    /// The snapshot root is missing or is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A file name cannot be represented in a tree (non-UTF-8).
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    /// A restored file would replace a directory that must be kept.
    #[error("path conflicts with a retained directory: {0}")]
    PathConflict(PathBuf),

    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] strata_store::StoreError),

    /// Directory traversal failed.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Reading or writing a working file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for workdir results.
pub type WorkdirResult<T> = Result<T, WorkdirError>;
