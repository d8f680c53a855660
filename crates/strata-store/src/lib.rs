//! Content-addressed object storage for strata.
//!
//! This crate implements a hash-keyed object store analogous to git's
//! `.git/objects/` directory, plus the codecs for the two structured object
//! kinds. Every object is identified by the BLAKE3 digest of
//! `<kind> 0x00 <content>`.
//!
//! # Object Types
//!
//! - blob -- raw file content, stored as-is
//! - [`Tree`] -- sorted `<kind> <oid> <name>` lines
//! - [`Commit`] -- `tree`/`parent` headers, a blank line, then the message
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`FileObjectStore`] -- one file per object under `<meta>/objects/`
//! - [`InMemoryObjectStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Objects are immutable once written (content-addressing guarantees this).
//! 2. The store is append-only: nothing is ever deleted or rewritten.
//! 3. The store never interprets object contents; the codecs do.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod commit;
pub mod error;
pub mod file;
pub mod memory;
pub mod object;
pub mod traits;
pub mod tree;

// Re-export primary types at crate root for ergonomic imports.
pub use commit::{load_commit, store_commit, Commit};
pub use error::{StoreError, StoreResult};
pub use file::FileObjectStore;
pub use memory::InMemoryObjectStore;
pub use object::StoredObject;
pub use traits::ObjectStore;
pub use tree::{flatten, iter_tree, load_tree, store_tree, Tree, TreeEntry};
