//! Foundation types for strata.
//!
//! This crate provides the identifier and tag types shared by every other
//! strata crate.
//!
//! # Key Types
//!
//! - [`ObjectId`]: Content-addressed identifier (BLAKE3 digest of a header-prefixed object)
//! - [`ObjectKind`]: The type tag stored in front of every object (`blob`, `tree`, `commit`)

pub mod error;
pub mod kind;
pub mod object;

pub use error::TypeError;
pub use kind::ObjectKind;
pub use object::ObjectId;
