use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use strata_types::ObjectId;

use crate::error::{StoreError, StoreResult};
use crate::object::StoredObject;
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. All objects are held in memory behind a
/// `RwLock`. Objects are cloned on read/write.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<ObjectId, StoredObject>>,
    inserts: AtomicUsize,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            inserts: AtomicUsize::new(0),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Number of writes that actually inserted a new object.
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::Relaxed)
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn read(&self, id: &ObjectId) -> StoreResult<Option<StoredObject>> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn write(&self, object: &StoredObject) -> StoreResult<ObjectId> {
        let id = object.compute_id();
        if id.is_null() {
            return Err(StoreError::NullObjectId);
        }
        let mut map = self.objects.write().expect("lock poisoned");
        map.entry(id).or_insert_with(|| {
            self.inserts.fetch_add(1, Ordering::Relaxed);
            object.clone()
        });
        Ok(id)
    }

    fn exists(&self, id: &ObjectId) -> StoreResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use strata_types::ObjectKind;

    // -----------------------------------------------------------------------
    // put / get
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get_blob() {
        let store = InMemoryObjectStore::new();
        let id = store.put(b"hello world", ObjectKind::Blob).unwrap();
        assert!(!id.is_null());
        assert_eq!(store.get(&id, Some(ObjectKind::Blob)).unwrap(), b"hello world");
    }

    #[test]
    fn get_without_expected_kind_skips_check() {
        let store = InMemoryObjectStore::new();
        let id = store.put(b"listing", ObjectKind::Tree).unwrap();
        assert_eq!(store.get(&id, None).unwrap(), b"listing");
    }

    #[test]
    fn get_tree_as_blob_is_type_mismatch() {
        let store = InMemoryObjectStore::new();
        let id = store.put(b"", ObjectKind::Tree).unwrap();
        let err = store.get(&id, Some(ObjectKind::Blob)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::TypeMismatch {
                expected: ObjectKind::Blob,
                actual: ObjectKind::Tree,
                ..
            }
        ));
    }

    #[test]
    fn get_missing_object_is_not_found() {
        let store = InMemoryObjectStore::new();
        let id = ObjectId::from_hash([9; 32]);
        let err = store.get(&id, None).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
    }

    // -----------------------------------------------------------------------
    // Content-addressing correctness
    // -----------------------------------------------------------------------

    #[test]
    fn put_is_idempotent() {
        let store = InMemoryObjectStore::new();
        let id1 = store.put(b"identical content", ObjectKind::Blob).unwrap();
        let id2 = store.put(b"identical content", ObjectKind::Blob).unwrap();
        assert_eq!(id1, id2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.insert_count(), 1);
    }

    #[test]
    fn different_content_produces_different_ids() {
        let store = InMemoryObjectStore::new();
        let id1 = store.put(b"aaa", ObjectKind::Blob).unwrap();
        let id2 = store.put(b"bbb", ObjectKind::Blob).unwrap();
        assert_ne!(id1, id2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn stored_object_hash_matches_id() {
        let store = InMemoryObjectStore::new();
        let id = store.put(b"verify me", ObjectKind::Blob).unwrap();
        let read_back = store.read(&id).unwrap().unwrap();
        assert_eq!(read_back.compute_id(), id);
    }

    #[test]
    fn exists_tracks_writes() {
        let store = InMemoryObjectStore::new();
        let missing = ObjectId::from_hash([1; 32]);
        assert!(!store.exists(&missing).unwrap());
        let id = store.put(b"present", ObjectKind::Blob).unwrap();
        assert!(store.exists(&id).unwrap());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryObjectStore::default();
        store.put(b"x", ObjectKind::Blob).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryObjectStore"));
        assert!(debug.contains("object_count"));
    }

    proptest! {
        #[test]
        fn blob_content_survives_put_get(content in vec(any::<u8>(), 0..512)) {
            let store = InMemoryObjectStore::new();
            let id = store.put(&content, ObjectKind::Blob).unwrap();
            prop_assert_eq!(store.get(&id, Some(ObjectKind::Blob)).unwrap(), content);
        }
    }
}
