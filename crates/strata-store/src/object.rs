use strata_crypto::{ContentHasher, HEADER_SEPARATOR};
use strata_types::{ObjectId, ObjectKind};

use crate::error::{StoreError, StoreResult};

/// A stored object: kind tag + raw content + cached size.
///
/// `StoredObject` is the unit of storage. The store never interprets the
/// content; it is a pure key-value store keyed by content hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    /// The type of this object.
    pub kind: ObjectKind,
    /// The content bytes, without header.
    pub data: Vec<u8>,
    /// The size of `data` in bytes.
    pub size: u64,
}

impl StoredObject {
    /// Create a new stored object from kind and data.
    pub fn new(kind: ObjectKind, data: Vec<u8>) -> Self {
        let size = data.len() as u64;
        Self { kind, data, size }
    }

    /// Compute the content-addressed ID for this object.
    pub fn compute_id(&self) -> ObjectId {
        ContentHasher::for_kind(self.kind).hash(&self.data)
    }

    /// Encode as `<kind> 0x00 <content>`, the on-disk representation.
    pub fn to_framed(&self) -> Vec<u8> {
        ContentHasher::for_kind(self.kind).frame(&self.data)
    }

    /// Decode the on-disk representation of the object stored under `id`.
    ///
    /// The header is everything up to the first `0x00` byte; the rest is
    /// content, which may itself contain `0x00` bytes.
    pub fn from_framed(id: &ObjectId, framed: &[u8]) -> StoreResult<Self> {
        let split = framed
            .iter()
            .position(|b| *b == HEADER_SEPARATOR)
            .ok_or_else(|| StoreError::CorruptObject {
                id: *id,
                reason: "missing header separator".into(),
            })?;
        let tag = std::str::from_utf8(&framed[..split]).map_err(|_| {
            StoreError::CorruptObject {
                id: *id,
                reason: "header is not valid UTF-8".into(),
            }
        })?;
        let kind = tag
            .parse::<ObjectKind>()
            .map_err(|e| StoreError::CorruptObject {
                id: *id,
                reason: e.to_string(),
            })?;
        Ok(Self::new(kind, framed[split + 1..].to_vec()))
    }

    /// Fail with `TypeMismatch` unless this object has the `expected` kind.
    pub fn expect_kind(&self, id: &ObjectId, expected: ObjectKind) -> StoreResult<()> {
        if self.kind != expected {
            return Err(StoreError::TypeMismatch {
                id: *id,
                expected,
                actual: self.kind,
            });
        }
        Ok(())
    }
}
