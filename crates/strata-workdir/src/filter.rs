//! The ignore rule: the metadata directory is never snapshotted or deleted.

use std::path::Path;

/// True iff any component of `path` equals the metadata directory name.
///
/// The match is by name anywhere in the path, so a nested user directory
/// that happens to share the metadata name is skipped too.
pub fn is_ignored(path: &Path, meta_name: &str) -> bool {
    path.components().any(|c| c.as_os_str() == meta_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_metadata_directory_itself() {
        assert!(is_ignored(Path::new(".strata"), ".strata"));
    }

    #[test]
    fn matches_anything_below_it() {
        assert!(is_ignored(Path::new(".strata/objects/abc"), ".strata"));
        assert!(is_ignored(Path::new("nested/.strata/HEAD"), ".strata"));
    }

    #[test]
    fn ignores_similar_names() {
        assert!(!is_ignored(Path::new(".strata-backup/file"), ".strata"));
        assert!(!is_ignored(Path::new("src/strata.rs"), ".strata"));
    }

    #[test]
    fn empty_path_is_not_ignored() {
        assert!(!is_ignored(Path::new(""), ".strata"));
    }
}
