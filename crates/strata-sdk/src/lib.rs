//! High-level API for strata.
//!
//! Provides a unified [`Repository`] type wiring the object store, the
//! reference store and the working directory together. This is the main
//! entry point for applications embedding strata, and the only thing the
//! CLI talks to.

pub mod config;
pub mod error;
pub mod log;
pub mod repository;

pub use config::{RepoConfig, DEFAULT_META_DIR};
pub use error::{SdkError, SdkResult};
pub use log::LogEntry;
pub use repository::Repository;

// Re-export key types
pub use strata_refs::{RefStore, HEAD};
pub use strata_store::{Commit, ObjectStore, StoredObject, Tree, TreeEntry};
pub use strata_types::{ObjectId, ObjectKind};
