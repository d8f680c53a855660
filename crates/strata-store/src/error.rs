use strata_types::{ObjectId, ObjectKind};

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested object was not found.
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// The stored object's kind differs from the one the caller asked for.
    #[error("type mismatch for {id}: expected {expected}, got {actual}")]
    TypeMismatch {
        id: ObjectId,
        expected: ObjectKind,
        actual: ObjectKind,
    },

    /// A commit object carries an unknown or unparsable header line.
    #[error("malformed commit {id}: {reason}")]
    MalformedCommit { id: ObjectId, reason: String },

    /// A tree entry is neither a blob nor a tree.
    #[error("unexpected entry type {kind:?} for tree entry {name:?}")]
    UnexpectedEntryType { name: String, kind: String },

    /// A tree entry name cannot be stored or restored safely.
    #[error("invalid tree entry name {name:?}: {reason}")]
    InvalidEntryName { name: String, reason: String },

    /// Content hash mismatch on read (data corruption).
    #[error("hash mismatch for {id}: file content hashes to {computed}")]
    HashMismatch { id: ObjectId, computed: ObjectId },

    /// The object data is malformed or cannot be decoded.
    #[error("corrupt object {id}: {reason}")]
    CorruptObject { id: ObjectId, reason: String },

    /// Attempted to write or read a null object ID.
    #[error("cannot store object with null ID")]
    NullObjectId,

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
