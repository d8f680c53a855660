//! Working directory snapshot and restore for strata.
//!
//! Turns the live directory tree into tree and blob objects, and writes a
//! stored tree back onto disk. The repository's metadata directory is
//! invisible to both directions.
//!
//! # Key Types
//!
//! - [`Workdir`]: a working directory root plus the metadata directory name
//! - [`is_ignored`]: the ignore rule shared by snapshot and clear
//! - [`WorkdirError`]: errors from walking, reading, and writing files

pub mod error;
pub mod filter;
pub mod materialize;
pub mod snapshot;

pub use error::{WorkdirError, WorkdirResult};
pub use filter::is_ignored;
pub use snapshot::Workdir;
