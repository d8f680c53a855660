//! Snapshot: walk the working directory into blob and tree objects.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use strata_store::{store_tree, ObjectStore, Tree, TreeEntry};
use strata_types::{ObjectId, ObjectKind};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{WorkdirError, WorkdirResult};
use crate::filter::is_ignored;

/// A working directory: the root the repository snapshots and restores,
/// and the name of the metadata directory inside it.
#[derive(Clone, Debug)]
pub struct Workdir {
    root: PathBuf,
    meta_name: String,
}

impl Workdir {
    pub fn new(root: impl Into<PathBuf>, meta_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            meta_name: meta_name.into(),
        }
    }

    /// The working directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Apply the ignore rule to a path under the root.
    ///
    /// Only components below the root are considered, so a root that itself
    /// lives inside a directory named like the metadata directory still works.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        is_ignored(relative, &self.meta_name)
    }

    /// Every non-ignored entry under the root, parents before children.
    ///
    /// Ignored directories are pruned without being descended into.
    pub(crate) fn walk(&self) -> WorkdirResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e.path()))
        {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// Snapshot the working directory into `store` and return the root tree ID.
    ///
    /// Regular files become blobs and directories become trees; symlinks and
    /// other special files are skipped. Entries are visited children-first so
    /// each directory's tree is built once all of its entries are stored.
    pub fn write_tree(&self, store: &dyn ObjectStore) -> WorkdirResult<ObjectId> {
        let mut pending: HashMap<PathBuf, Vec<TreeEntry>> = HashMap::new();

        for entry in self.walk()?.into_iter().rev() {
            let path = entry.path();
            let file_type = entry.file_type();

            if entry.depth() == 0 {
                if !file_type.is_dir() {
                    return Err(WorkdirError::NotADirectory(path.to_path_buf()));
                }
                let tree = Tree::new(pending.remove(path).unwrap_or_default());
                let id = store_tree(store, &tree)?;
                debug!(
                    root = %path.display(),
                    tree = %id.short_hex(),
                    entries = tree.len(),
                    "snapshot written"
                );
                return Ok(id);
            }

            let (kind, id) = if file_type.is_file() {
                let content = fs::read(path)?;
                (ObjectKind::Blob, store.put(&content, ObjectKind::Blob)?)
            } else if file_type.is_dir() {
                let tree = Tree::new(pending.remove(path).unwrap_or_default());
                (ObjectKind::Tree, store_tree(store, &tree)?)
            } else {
                debug!(path = %path.display(), "skipping special file");
                continue;
            };

            let name = entry
                .file_name()
                .to_str()
                .ok_or_else(|| WorkdirError::InvalidPath(path.to_path_buf()))?;
            TreeEntry::validate_name(name)?;

            let parent = path
                .parent()
                .ok_or_else(|| WorkdirError::InvalidPath(path.to_path_buf()))?;
            pending
                .entry(parent.to_path_buf())
                .or_default()
                .push(TreeEntry::new(kind, id, name));
        }

        Err(WorkdirError::NotADirectory(self.root.clone()))
    }
}
