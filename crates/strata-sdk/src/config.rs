use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default name of the metadata directory inside the working directory.
pub const DEFAULT_META_DIR: &str = ".strata";

/// Where a repository lives on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Root of the working directory that gets snapshotted and restored.
    pub work_dir: PathBuf,
    /// Name of the metadata directory inside `work_dir`.
    pub meta_dir_name: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            meta_dir_name: DEFAULT_META_DIR.to_string(),
        }
    }
}

impl RepoConfig {
    /// Config for a working directory using the default metadata name.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_meta_dir_name(mut self, name: impl Into<String>) -> Self {
        self.meta_dir_name = name.into();
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// `<work_dir>/<meta_dir_name>`
    pub fn meta_dir(&self) -> PathBuf {
        self.work_dir.join(&self.meta_dir_name)
    }

    /// `<meta>/objects`
    pub fn objects_dir(&self) -> PathBuf {
        self.meta_dir().join("objects")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RepoConfig::default();
        assert_eq!(c.work_dir, PathBuf::from("."));
        assert_eq!(c.meta_dir_name, ".strata");
        assert_eq!(c.objects_dir(), PathBuf::from("./.strata/objects"));
    }

    #[test]
    fn custom_meta_dir_name() {
        let c = RepoConfig::new("/tmp/work").with_meta_dir_name(".vc");
        assert_eq!(c.meta_dir(), PathBuf::from("/tmp/work/.vc"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let c: RepoConfig = serde_json::from_str(r#"{"work_dir": "/srv/site"}"#).unwrap();
        assert_eq!(c.work_dir, PathBuf::from("/srv/site"));
        assert_eq!(c.meta_dir_name, DEFAULT_META_DIR);
    }
}
