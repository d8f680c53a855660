//! Content hashing for strata.
//!
//! Every object id is the BLAKE3 digest of `<kind> 0x00 <content>`. The kind
//! tag acts as a domain separator: a blob and a tree with identical bytes
//! hash to different ids.
//!
//! All crypto operations wrap established libraries; there is no custom cryptography.

pub mod hasher;

pub use hasher::{ContentHasher, HEADER_SEPARATOR};
