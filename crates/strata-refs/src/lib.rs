//! Reference management for strata.
//!
//! This crate provides named references (`HEAD`, tags) that point to
//! objects in the store. References are the human-readable entry points into
//! the commit chain, analogous to git refs.
//!
//! # Architecture
//!
//! - **HEAD** is a plain reference naming the current commit. It is absent
//!   until the first commit and is rewritten by commit and checkout.
//! - **Tags** live under `refs/tags/` and are immutable: once created, a tag
//!   is never moved.
//! - **Resolution** turns a user token (`@`, `HEAD`, a tag name, a full ref
//!   name, or a raw hex oid) into an [`ObjectId`](strata_types::ObjectId).
//!
//! # Modules
//!
//! - [`error`]: Error types for ref operations
//! - [`traits`]: The [`RefStore`] trait defining the storage interface
//! - [`names`]: Ref/tag name validation
//! - [`file`]: On-disk [`FileRefStore`] rooted at the metadata directory
//! - [`memory`]: In-memory [`InMemoryRefStore`] for tests

pub mod error;
pub mod file;
pub mod memory;
pub mod names;
pub mod traits;

pub use error::{RefError, Result};
pub use file::FileRefStore;
pub use memory::InMemoryRefStore;
pub use names::{validate_ref_name, validate_tag_name};
pub use traits::{RefStore, HEAD, REFS_PREFIX, TAGS_PREFIX};
