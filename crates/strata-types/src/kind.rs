use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The type tag written in front of every stored object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Raw file content.
    Blob,
    /// Sorted directory listing of blob and tree entries.
    Tree,
    /// History node: a tree, an optional parent and a message.
    Commit,
}

impl ObjectKind {
    /// The tag as it appears in object headers and tree lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blob" => Ok(Self::Blob),
            "tree" => Ok(Self::Tree),
            "commit" => Ok(Self::Commit),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_header_tag() {
        assert_eq!(format!("{}", ObjectKind::Blob), "blob");
        assert_eq!(format!("{}", ObjectKind::Tree), "tree");
        assert_eq!(format!("{}", ObjectKind::Commit), "commit");
    }

    #[test]
    fn parses_known_tags() {
        assert_eq!("tree".parse::<ObjectKind>().unwrap(), ObjectKind::Tree);
        assert_eq!("commit".parse::<ObjectKind>().unwrap(), ObjectKind::Commit);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "symlink".parse::<ObjectKind>().unwrap_err();
        assert_eq!(err, TypeError::UnknownKind("symlink".into()));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("Blob".parse::<ObjectKind>().is_err());
    }
}
