//! Commit codec: history nodes linking a tree to an optional parent.
//!
//! Text format:
//!
//! ```text
//! tree <oid>
//! parent <oid>        (only when the commit has a parent)
//!
//! <message, verbatim>
//! ```

use strata_types::{ObjectId, ObjectKind};

use crate::error::{StoreError, StoreResult};
use crate::object::StoredObject;
use crate::traits::ObjectStore;

/// One node in the linear history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    /// Root tree of the snapshot.
    pub tree: ObjectId,
    /// Previous commit, absent for the first commit.
    pub parent: Option<ObjectId>,
    /// Free-text message, preserved byte for byte.
    pub message: String,
}

impl Commit {
    pub fn new(tree: ObjectId, parent: Option<ObjectId>, message: impl Into<String>) -> Self {
        Self {
            tree,
            parent,
            message: message.into(),
        }
    }

    /// Serialize to the commit object text format.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = format!("tree {}\n", self.tree);
        if let Some(parent) = &self.parent {
            out.push_str(&format!("parent {parent}\n"));
        }
        out.push('\n');
        out.push_str(&self.message);
        out.into_bytes()
    }

    /// Parse commit object content stored under `id`.
    ///
    /// Header lines run up to the first blank line; everything after it is
    /// the message, kept verbatim including embedded and trailing newlines.
    pub fn decode(id: &ObjectId, data: &[u8]) -> StoreResult<Self> {
        let malformed = |reason: String| StoreError::MalformedCommit { id: *id, reason };

        let text = std::str::from_utf8(data)
            .map_err(|_| malformed("commit is not valid UTF-8".into()))?;

        let mut lines = text.split('\n');
        let mut tree = None;
        let mut parent = None;
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            let (key, value) = line
                .split_once(' ')
                .ok_or_else(|| malformed(format!("header line without value: {line:?}")))?;
            let slot = match key {
                "tree" => &mut tree,
                "parent" => &mut parent,
                other => return Err(malformed(format!("unknown header key {other:?}"))),
            };
            if slot.is_some() {
                return Err(malformed(format!("duplicate {key} header")));
            }
            let value = value
                .parse::<ObjectId>()
                .map_err(|e| malformed(format!("bad {key} id: {e}")))?;
            *slot = Some(value);
        }

        let tree = tree.ok_or_else(|| malformed("missing tree header".into()))?;
        let message = lines.collect::<Vec<_>>().join("\n");
        Ok(Self {
            tree,
            parent,
            message,
        })
    }

    /// Convert into a `StoredObject` for storage.
    pub fn to_stored_object(&self) -> StoredObject {
        StoredObject::new(ObjectKind::Commit, self.encode())
    }
}

/// Store `commit` and return its ID.
pub fn store_commit(store: &dyn ObjectStore, commit: &Commit) -> StoreResult<ObjectId> {
    store.write(&commit.to_stored_object())
}

/// Load and parse the commit stored under `id`.
pub fn load_commit(store: &dyn ObjectStore, id: &ObjectId) -> StoreResult<Commit> {
    let data = store.get(id, Some(ObjectKind::Commit))?;
    Commit::decode(id, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryObjectStore;

    fn oid(byte: u8) -> ObjectId {
        ObjectId::from_hash([byte; 32])
    }

    #[test]
    fn encode_root_commit_has_no_parent_line() {
        let commit = Commit::new(oid(1), None, "first");
        let expected = format!("tree {}\n\nfirst", oid(1));
        assert_eq!(commit.encode(), expected.into_bytes());
    }

    #[test]
    fn encode_with_parent() {
        let commit = Commit::new(oid(1), Some(oid(2)), "second");
        let expected = format!("tree {}\nparent {}\n\nsecond", oid(1), oid(2));
        assert_eq!(commit.encode(), expected.into_bytes());
    }

    #[test]
    fn multiline_message_is_preserved_verbatim() {
        let message = "subject\n\nbody line\n\ntrailing\n";
        let commit = Commit::new(oid(1), Some(oid(2)), message);
        let decoded = Commit::decode(&oid(9), &commit.encode()).unwrap();
        assert_eq!(decoded.message, message);
        assert_eq!(decoded, commit);
    }

    #[test]
    fn empty_message_decodes() {
        let commit = Commit::new(oid(4), None, "");
        let decoded = Commit::decode(&oid(9), &commit.encode()).unwrap();
        assert_eq!(decoded.message, "");
        assert!(decoded.parent.is_none());
    }

    #[test]
    fn unknown_header_key_is_malformed() {
        let text = format!("tree {}\nauthor someone\n\nmsg", oid(1));
        let err = Commit::decode(&oid(9), text.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedCommit { .. }));
    }

    #[test]
    fn missing_tree_is_malformed() {
        let text = format!("parent {}\n\nmsg", oid(1));
        let err = Commit::decode(&oid(9), text.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedCommit { .. }));
    }

    #[test]
    fn duplicate_parent_is_malformed() {
        let text = format!("tree {}\nparent {}\nparent {}\n\nmsg", oid(1), oid(2), oid(3));
        let err = Commit::decode(&oid(9), text.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedCommit { .. }));
    }

    #[test]
    fn store_and_load_roundtrip() {
        let store = InMemoryObjectStore::new();
        let commit = Commit::new(oid(1), None, "hello");
        let id = store_commit(&store, &commit).unwrap();
        assert_eq!(load_commit(&store, &id).unwrap(), commit);
    }

    #[test]
    fn load_commit_rejects_tree_object() {
        let store = InMemoryObjectStore::new();
        let id = store.put(b"", ObjectKind::Tree).unwrap();
        let err = load_commit(&store, &id).unwrap_err();
        assert!(matches!(err, StoreError::TypeMismatch { .. }));
    }
}
