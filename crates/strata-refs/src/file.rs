//! File-backed reference store.
//!
//! Each ref is a file under the metadata directory whose path is the ref
//! name (`<meta>/HEAD`, `<meta>/refs/tags/<name>`) and whose content is the
//! target's hex oid.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use strata_types::ObjectId;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{RefError, Result};
use crate::names::validate_ref_name;
use crate::traits::{RefStore, REFS_PREFIX};

/// Ref store rooted at a repository's metadata directory.
#[derive(Clone, Debug)]
pub struct FileRefStore {
    root: PathBuf,
}

impl FileRefStore {
    /// Open a ref store rooted at `root` (the metadata directory).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The metadata directory this store is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ref_path(&self, name: &str) -> Result<PathBuf> {
        validate_ref_name(name)?;
        Ok(name.split('/').fold(self.root.clone(), |path, part| path.join(part)))
    }

    fn parse_target(name: &str, content: &str) -> Result<Option<ObjectId>> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<ObjectId>()
            .map(Some)
            .map_err(|e| RefError::InvalidTarget {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}

impl RefStore for FileRefStore {
    fn read_ref(&self, name: &str) -> Result<Option<ObjectId>> {
        let path = self.ref_path(name)?;
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Self::parse_target(name, &content)
    }

    fn write_ref(&self, name: &str, target: &ObjectId) -> Result<()> {
        let path = self.ref_path(name)?;
        let parent = path.parent().unwrap_or(&self.root);
        fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(target.to_hex().as_bytes())?;
        tmp.persist(&path).map_err(|e| RefError::Io(e.error))?;

        debug!(name, target = %target.short_hex(), "ref updated");
        Ok(())
    }

    fn list_refs(&self, prefix: &str) -> Result<Vec<(String, ObjectId)>> {
        let refs_dir = self.root.join(REFS_PREFIX.trim_end_matches('/'));
        if !refs_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut refs = Vec::new();
        for entry in WalkDir::new(&refs_dir).follow_links(false) {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| io::Error::other("ref directory walk failed"))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if !name.starts_with(prefix) {
                continue;
            }
            if validate_ref_name(&name).is_err() {
                warn!(path = %entry.path().display(), "skipping file with invalid ref name");
                continue;
            }
            if let Some(id) = self.read_ref(&name)? {
                refs.push((name, id));
            }
        }
        refs.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(refs)
    }
}
