//! Materializer: write a stored tree back onto the working directory.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use strata_store::{flatten, ObjectStore};
use strata_types::{ObjectId, ObjectKind};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{WorkdirError, WorkdirResult};
use crate::snapshot::Workdir;

impl Workdir {
    /// Delete every non-ignored file, then every non-ignored directory that
    /// ends up empty.
    ///
    /// Files go before the directories that contain them. Directory removal
    /// failures are tolerated: a directory still holding ignored content is
    /// expected to survive. The root itself is never removed.
    pub fn clear(&self) -> WorkdirResult<()> {
        let mut files = 0usize;
        for entry in self.walk()?.into_iter().rev() {
            if entry.depth() == 0 {
                continue;
            }
            let path = entry.path();
            if entry.file_type().is_dir() {
                if let Err(e) = fs::remove_dir(path) {
                    debug!(path = %path.display(), error = %e, "directory kept");
                }
            } else {
                fs::remove_file(path)?;
                files += 1;
            }
        }
        debug!(root = %self.root().display(), files, "working directory cleared");
        Ok(())
    }

    /// Replace the working directory's contents with the tree `tree_id`.
    ///
    /// Every blob is read and every target path checked before anything is
    /// deleted, so a missing or corrupt object, or a file that would land on a
    /// directory `clear` has to keep, leaves the working directory untouched.
    /// Untracked, non-ignored files are removed.
    pub fn restore_tree(&self, store: &dyn ObjectStore, tree_id: &ObjectId) -> WorkdirResult<()> {
        let files = flatten(store, tree_id, "")?;
        let retained = self.retained_dirs()?;

        let mut staged = Vec::with_capacity(files.len());
        for (relative, blob_id) in &files {
            let path = relative
                .split('/')
                .fold(self.root().to_path_buf(), |p: PathBuf, part| p.join(part));
            if self.is_ignored(&path) {
                warn!(path = %relative, "tree entry inside metadata directory not restored");
                continue;
            }
            if retained.contains(&path) {
                return Err(WorkdirError::PathConflict(path));
            }
            let content = store.get(blob_id, Some(ObjectKind::Blob))?;
            staged.push((path, content));
        }

        self.clear()?;
        for (path, content) in &staged {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }

        info!(tree = %tree_id.short_hex(), files = staged.len(), "tree restored");
        Ok(())
    }

    /// Directories `clear` leaves in place because they hold ignored content.
    fn retained_dirs(&self) -> WorkdirResult<HashSet<PathBuf>> {
        let mut retained = HashSet::new();
        let mut walk = WalkDir::new(self.root()).follow_links(false).into_iter();
        while let Some(entry) = walk.next() {
            let entry = entry?;
            if entry.depth() == 0 || !self.is_ignored(entry.path()) {
                continue;
            }
            if entry.file_type().is_dir() {
                walk.skip_current_dir();
            }
            for ancestor in entry.path().ancestors().skip(1) {
                if ancestor == self.root() || !retained.insert(ancestor.to_path_buf()) {
                    break;
                }
            }
        }
        Ok(retained)
    }
}
