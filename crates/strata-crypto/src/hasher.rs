use strata_types::{ObjectId, ObjectKind};

/// Byte separating the kind tag from the content in an object's header.
pub const HEADER_SEPARATOR: u8 = 0x00;

/// Kind-separated BLAKE3 content hasher.
///
/// Each hasher carries the object kind whose tag is prepended (followed by
/// [`HEADER_SEPARATOR`]) to every hash computation. The hashed bytes are
/// exactly the bytes an on-disk object file holds.
pub struct ContentHasher {
    kind: ObjectKind,
}

impl ContentHasher {
    /// The hasher for the given object kind.
    pub const fn for_kind(kind: ObjectKind) -> Self {
        Self { kind }
    }

    /// Hash content with its kind header.
    pub fn hash(&self, content: &[u8]) -> ObjectId {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.kind.as_str().as_bytes());
        hasher.update(&[HEADER_SEPARATOR]);
        hasher.update(content);
        ObjectId::from_hash(*hasher.finalize().as_bytes())
    }

    /// Hash bytes that already carry their header (an object file's contents).
    pub fn hash_framed(framed: &[u8]) -> ObjectId {
        ObjectId::from_hash(*blake3::hash(framed).as_bytes())
    }

    /// Build the header-prefixed bytes for `content`.
    pub fn frame(&self, content: &[u8]) -> Vec<u8> {
        let tag = self.kind.as_str().as_bytes();
        let mut framed = Vec::with_capacity(tag.len() + 1 + content.len());
        framed.extend_from_slice(tag);
        framed.push(HEADER_SEPARATOR);
        framed.extend_from_slice(content);
        framed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOB: ContentHasher = ContentHasher::for_kind(ObjectKind::Blob);
    const TREE: ContentHasher = ContentHasher::for_kind(ObjectKind::Tree);
    const COMMIT: ContentHasher = ContentHasher::for_kind(ObjectKind::Commit);

    #[test]
    fn hash_is_deterministic() {
        let data = b"hello world";
        assert_eq!(BLOB.hash(data), BLOB.hash(data));
    }

    #[test]
    fn different_kinds_produce_different_hashes() {
        let data = b"same content";
        let blob_hash = BLOB.hash(data);
        let tree_hash = TREE.hash(data);
        let commit_hash = COMMIT.hash(data);
        assert_ne!(blob_hash, tree_hash);
        assert_ne!(blob_hash, commit_hash);
        assert_ne!(tree_hash, commit_hash);
    }

    #[test]
    fn hash_covers_header_and_content() {
        let id = BLOB.hash(b"abc");
        let expected = blake3::hash(b"blob\x00abc");
        assert_eq!(id.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn framed_hash_matches_content_hash() {
        let framed = TREE.frame(b"entries");
        assert_eq!(framed, b"tree\x00entries");
        assert_eq!(ContentHasher::hash_framed(&framed), TREE.hash(b"entries"));
    }

    #[test]
    fn tampered_content_changes_hash() {
        assert_ne!(BLOB.hash(b"original"), BLOB.hash(b"tampered"));
    }
}
