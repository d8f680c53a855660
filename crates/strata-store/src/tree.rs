//! Tree codec: directory snapshots as sorted, typed entry listings.
//!
//! A tree object's content is one line per entry, `<kind> <oid> <name>\n`,
//! with lines sorted by name so that unchanged content always hashes to the
//! same tree ID.

use std::collections::BTreeMap;

use strata_types::{ObjectId, ObjectKind};

use crate::error::{StoreError, StoreResult};
use crate::object::StoredObject;
use crate::traits::ObjectStore;

/// A single entry in a tree object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEntry {
    /// Kind of the referenced object (blob or tree in well-formed trees).
    pub kind: ObjectKind,
    /// Content-addressed ID of the referenced object.
    pub object_id: ObjectId,
    /// Entry name (file name or directory name).
    pub name: String,
}

impl TreeEntry {
    /// Create a new tree entry.
    pub fn new(kind: ObjectKind, object_id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            kind,
            object_id,
            name: name.into(),
        }
    }

    /// Check that `name` is a single path component the codec can encode.
    pub fn validate_name(name: &str) -> StoreResult<()> {
        let reason = if name.is_empty() {
            "name is empty"
        } else if name == "." || name == ".." {
            "name is a relative path component"
        } else if name.contains('/') {
            "name contains '/'"
        } else if name.contains('\n') {
            "name contains a newline"
        } else if name.contains('\0') {
            "name contains a NUL byte"
        } else {
            return Ok(());
        };
        Err(StoreError::InvalidEntryName {
            name: name.to_string(),
            reason: reason.into(),
        })
    }

    fn encode_into(&self, out: &mut String) {
        out.push_str(self.kind.as_str());
        out.push(' ');
        out.push_str(&self.object_id.to_hex());
        out.push(' ');
        out.push_str(&self.name);
        out.push('\n');
    }
}

impl PartialOrd for TreeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TreeEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.object_id.cmp(&other.object_id))
    }
}

/// Directory listing object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    /// Entries in this directory, in stored order.
    pub entries: Vec<TreeEntry>,
}

impl Tree {
    /// Create a new tree with the given entries.
    ///
    /// Entries are sorted by name for deterministic hashing.
    pub fn new(mut entries: Vec<TreeEntry>) -> Self {
        entries.sort();
        Self { entries }
    }

    /// Create an empty tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Serialize to the tree object text format.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = String::new();
        for entry in &self.entries {
            entry.encode_into(&mut out);
        }
        out.into_bytes()
    }

    /// Parse tree object content stored under `id`.
    ///
    /// Entries keep the order in which they appear in the object. Lines
    /// split into at most three fields, so names may contain spaces.
    pub fn decode(id: &ObjectId, data: &[u8]) -> StoreResult<Self> {
        let text = std::str::from_utf8(data).map_err(|_| StoreError::CorruptObject {
            id: *id,
            reason: "tree is not valid UTF-8".into(),
        })?;

        let mut entries = Vec::new();
        for line in text.split_terminator('\n') {
            let mut fields = line.splitn(3, ' ');
            let (Some(kind), Some(oid), Some(name)) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(StoreError::CorruptObject {
                    id: *id,
                    reason: format!("malformed tree line {line:?}"),
                });
            };
            let kind = kind
                .parse::<ObjectKind>()
                .map_err(|_| StoreError::UnexpectedEntryType {
                    name: name.to_string(),
                    kind: kind.to_string(),
                })?;
            let object_id = oid.parse::<ObjectId>().map_err(|e| StoreError::CorruptObject {
                id: *id,
                reason: format!("bad object id for entry {name:?}: {e}"),
            })?;
            TreeEntry::validate_name(name)?;
            entries.push(TreeEntry::new(kind, object_id, name));
        }
        Ok(Self { entries })
    }

    /// Convert into a `StoredObject` for storage.
    pub fn to_stored_object(&self) -> StoredObject {
        StoredObject::new(ObjectKind::Tree, self.encode())
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Tree {
    type Item = TreeEntry;
    type IntoIter = std::vec::IntoIter<TreeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Store `tree` and return its ID.
pub fn store_tree(store: &dyn ObjectStore, tree: &Tree) -> StoreResult<ObjectId> {
    store.write(&tree.to_stored_object())
}

/// Load the tree stored under `id`; `None` yields the empty tree.
pub fn load_tree(store: &dyn ObjectStore, id: Option<&ObjectId>) -> StoreResult<Tree> {
    let Some(id) = id else {
        return Ok(Tree::empty());
    };
    let data = store.get(id, Some(ObjectKind::Tree))?;
    Tree::decode(id, &data)
}

/// Iterate the entries of one tree object.
///
/// An absent ID produces no entries rather than an error, so callers can
/// treat "no tree yet" like an empty tree.
pub fn iter_tree(
    store: &dyn ObjectStore,
    id: Option<&ObjectId>,
) -> StoreResult<impl Iterator<Item = TreeEntry>> {
    Ok(load_tree(store, id)?.into_iter())
}

/// Expand a tree depth-first into a map of `/`-joined path to blob ID.
///
/// Paths are relative to the tree root, prefixed with `prefix` when it is
/// non-empty.
pub fn flatten(
    store: &dyn ObjectStore,
    id: &ObjectId,
    prefix: &str,
) -> StoreResult<BTreeMap<String, ObjectId>> {
    let mut out = BTreeMap::new();
    flatten_into(store, id, prefix, &mut out)?;
    Ok(out)
}

fn flatten_into(
    store: &dyn ObjectStore,
    id: &ObjectId,
    prefix: &str,
    out: &mut BTreeMap<String, ObjectId>,
) -> StoreResult<()> {
    for entry in iter_tree(store, Some(id))? {
        let path = if prefix.is_empty() {
            entry.name.clone()
        } else {
            format!("{prefix}/{}", entry.name)
        };
        match entry.kind {
            ObjectKind::Blob => {
                out.insert(path, entry.object_id);
            }
            ObjectKind::Tree => flatten_into(store, &entry.object_id, &path, out)?,
            other => {
                return Err(StoreError::UnexpectedEntryType {
                    name: path,
                    kind: other.to_string(),
                })
            }
        }
    }
    Ok(())
}
