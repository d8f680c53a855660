//! On-disk object store: one file per object under `<meta>/objects/`.
//!
//! Each file is named by the object's hex ID and holds `<kind> 0x00 <content>`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use strata_crypto::ContentHasher;
use strata_types::ObjectId;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::object::StoredObject;
use crate::traits::ObjectStore;

/// Object store backed by a flat directory of object files.
#[derive(Clone, Debug)]
pub struct FileObjectStore {
    root: PathBuf,
}

impl FileObjectStore {
    /// Open a store rooted at `root`, which must already exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the object directory (and parents) if missing, then open it.
    pub fn create(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory holding the object files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds (or would hold) `id`.
    pub fn object_path(&self, id: &ObjectId) -> PathBuf {
        self.root.join(id.to_hex())
    }
}

impl ObjectStore for FileObjectStore {
    fn read(&self, id: &ObjectId) -> StoreResult<Option<StoredObject>> {
        if id.is_null() {
            return Err(StoreError::NullObjectId);
        }
        let framed = match fs::read(self.object_path(id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let computed = ContentHasher::hash_framed(&framed);
        if computed != *id {
            return Err(StoreError::HashMismatch { id: *id, computed });
        }
        StoredObject::from_framed(id, &framed).map(Some)
    }

    fn write(&self, object: &StoredObject) -> StoreResult<ObjectId> {
        let id = object.compute_id();
        if id.is_null() {
            return Err(StoreError::NullObjectId);
        }
        let path = self.object_path(&id);
        if path.is_file() {
            debug!(id = %id.short_hex(), kind = %object.kind, "object already stored");
            return Ok(id);
        }

        // Readers never observe a partially written object.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)?;
        tmp.write_all(&object.to_framed())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;

        debug!(id = %id.short_hex(), kind = %object.kind, size = object.size, "object written");
        Ok(id)
    }

    fn exists(&self, id: &ObjectId) -> StoreResult<bool> {
        Ok(self.object_path(id).is_file())
    }
}
