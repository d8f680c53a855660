//! The [`RefStore`] trait defining the reference storage interface.
//!
//! Any backend (in-memory, filesystem) implements the three primitive
//! operations; HEAD handling, tagging and name resolution are provided on
//! top of them so every backend behaves the same way.

use strata_types::ObjectId;

use crate::error::{RefError, Result};
use crate::names::{validate_ref_name, validate_tag_name};

/// Name of the reference that tracks the current commit.
pub const HEAD: &str = "HEAD";
/// Namespace holding every reference other than HEAD.
pub const REFS_PREFIX: &str = "refs/";
/// Namespace holding tags.
pub const TAGS_PREFIX: &str = "refs/tags/";

/// Shorthand accepted wherever a ref token is expected, meaning HEAD.
const HEAD_ALIAS: &str = "@";

/// Storage backend for named references.
///
/// The namespace follows a hierarchical layout:
///
/// - `HEAD` for the current commit
/// - `refs/tags/*` for tags
pub trait RefStore: Send + Sync {
    /// Read a ref by its full name (e.g. "HEAD", "refs/tags/v1").
    ///
    /// Returns `Ok(None)` if the ref does not exist.
    fn read_ref(&self, name: &str) -> Result<Option<ObjectId>>;

    /// Point the ref `name` at `target`, creating or overwriting it.
    fn write_ref(&self, name: &str, target: &ObjectId) -> Result<()>;

    /// List refs under `refs/` whose full name starts with `prefix`,
    /// sorted by name. HEAD is never included.
    fn list_refs(&self, prefix: &str) -> Result<Vec<(String, ObjectId)>>;

    /// The commit HEAD points at, if any commit exists yet.
    fn head(&self) -> Result<Option<ObjectId>> {
        self.read_ref(HEAD)
    }

    /// Move HEAD to `target`.
    fn set_head(&self, target: &ObjectId) -> Result<()> {
        self.write_ref(HEAD, target)
    }

    /// Create the tag `refs/tags/<name>` pointing at `target`.
    ///
    /// Tags never move: creating a tag that already exists fails with
    /// [`RefError::TagImmutable`].
    fn create_tag(&self, name: &str, target: &ObjectId) -> Result<()> {
        validate_tag_name(name)?;
        let full = format!("{TAGS_PREFIX}{name}");
        if self.read_ref(&full)?.is_some() {
            return Err(RefError::TagImmutable { name: full });
        }
        self.write_ref(&full, target)
    }

    /// Every ref paired with its target: HEAD first (absent before the
    /// first commit), then everything under `refs/` in name order.
    fn iter_refs(&self) -> Result<Vec<(String, Option<ObjectId>)>> {
        let mut refs = vec![(HEAD.to_string(), self.head()?)];
        refs.extend(
            self.list_refs(REFS_PREFIX)?
                .into_iter()
                .map(|(name, id)| (name, Some(id))),
        );
        Ok(refs)
    }

    /// Turn a user token into an object id.
    ///
    /// `@` means HEAD. Otherwise the token itself, `refs/<token>` and
    /// `refs/tags/<token>` are tried in that order as ref names; the first
    /// existing ref wins. Only `HEAD` and names under `refs/` are ever read.
    /// A token naming no ref is parsed as a hex oid.
    fn resolve(&self, token: &str) -> Result<ObjectId> {
        let token = if token == HEAD_ALIAS { HEAD } else { token };
        let candidates = [
            token.to_string(),
            format!("{REFS_PREFIX}{token}"),
            format!("{TAGS_PREFIX}{token}"),
        ];
        for candidate in &candidates {
            let is_ref = candidate == HEAD || candidate.starts_with(REFS_PREFIX);
            if !is_ref || validate_ref_name(candidate).is_err() {
                continue;
            }
            if let Some(id) = self.read_ref(candidate)? {
                return Ok(id);
            }
        }
        token.parse::<ObjectId>().map_err(|_| RefError::UnresolvedName {
            token: token.to_string(),
        })
    }
}
