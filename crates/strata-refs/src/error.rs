//! Error types for reference operations.

use thiserror::Error;

/// Errors that can occur during reference operations.
#[derive(Debug, Error)]
pub enum RefError {
    /// The reference name is not a safe, well-formed path.
    #[error("invalid ref name: {name}: {reason}")]
    InvalidRefName { name: String, reason: String },

    /// The tag name is invalid.
    #[error("invalid tag name: {name}: {reason}")]
    InvalidTagName { name: String, reason: String },

    /// A tag is immutable and cannot be moved.
    #[error("tag already exists: {name}")]
    TagImmutable { name: String },

    /// The token is neither an existing ref nor a valid object id.
    #[error("not a ref or object id: {token}")]
    UnresolvedName { token: String },

    /// The ref's stored content is not an object id.
    #[error("ref {name} holds an invalid target: {reason}")]
    InvalidTarget { name: String, reason: String },

    /// I/O error during file-based ref operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for ref operations.
pub type Result<T> = std::result::Result<T, RefError>;
