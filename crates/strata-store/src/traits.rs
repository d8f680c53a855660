use strata_types::{ObjectId, ObjectKind};

use crate::error::{StoreError, StoreResult};
use crate::object::StoredObject;

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Objects are immutable once written. Content-addressing guarantees this:
///   the same kind and data always produce the same ID.
/// - Writing an object that already exists is a no-op beyond returning its ID.
/// - The store never interprets object contents; it is a pure key-value store.
/// - All I/O errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Read an object by its content-addressed ID.
    ///
    /// Returns `Ok(None)` if the object does not exist.
    /// Returns `Err` on I/O failure or data corruption.
    fn read(&self, id: &ObjectId) -> StoreResult<Option<StoredObject>>;

    /// Write an object and return its content-addressed ID.
    ///
    /// If the object already exists, this is a no-op (idempotent).
    fn write(&self, object: &StoredObject) -> StoreResult<ObjectId>;

    /// Check whether an object exists in the store.
    fn exists(&self, id: &ObjectId) -> StoreResult<bool>;

    /// Store `content` under the given kind and return its ID.
    fn put(&self, content: &[u8], kind: ObjectKind) -> StoreResult<ObjectId> {
        self.write(&StoredObject::new(kind, content.to_vec()))
    }

    /// Fetch the content of `id`, checking its kind when `expected` is given.
    ///
    /// Fails with [`StoreError::NotFound`] when no object exists and with
    /// [`StoreError::TypeMismatch`] when the stored kind differs.
    fn get(&self, id: &ObjectId, expected: Option<ObjectKind>) -> StoreResult<Vec<u8>> {
        let object = self.read(id)?.ok_or(StoreError::NotFound(*id))?;
        if let Some(kind) = expected {
            object.expect_kind(id, kind)?;
        }
        Ok(object.data)
    }
}
