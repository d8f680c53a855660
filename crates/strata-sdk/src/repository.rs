use std::fs;
use std::sync::Arc;

use strata_refs::{FileRefStore, RefStore, HEAD};
use strata_store::{load_commit, store_commit, Commit, FileObjectStore, ObjectStore, StoredObject};
use strata_types::{ObjectId, ObjectKind};
use strata_workdir::Workdir;
use tracing::info;

use crate::config::RepoConfig;
use crate::error::{SdkError, SdkResult};
use crate::log::LogEntry;

/// A strata repository: an object store, a ref store and the working
/// directory they describe.
pub struct Repository {
    config: RepoConfig,
    store: Arc<dyn ObjectStore>,
    refs: Arc<dyn RefStore>,
    workdir: Workdir,
}

impl Repository {
    /// Create a new repository on disk.
    ///
    /// Fails with [`SdkError::RepositoryAlreadyExists`] when the metadata
    /// directory is already present, leaving it untouched.
    pub fn init(config: RepoConfig) -> SdkResult<Self> {
        let meta = config.meta_dir();
        if meta.exists() {
            return Err(SdkError::RepositoryAlreadyExists(meta));
        }
        fs::create_dir_all(config.objects_dir())?;
        info!(path = %meta.display(), "initialized empty repository");
        Self::open(config)
    }

    /// Open an existing on-disk repository.
    pub fn open(config: RepoConfig) -> SdkResult<Self> {
        let meta = config.meta_dir();
        if !meta.is_dir() {
            return Err(SdkError::NotInitialized(meta));
        }
        let store = Arc::new(FileObjectStore::new(config.objects_dir()));
        let refs = Arc::new(FileRefStore::new(meta));
        Ok(Self::with_stores(config, store, refs))
    }

    /// Wire a repository from arbitrary store implementations.
    pub fn with_stores(
        config: RepoConfig,
        store: Arc<dyn ObjectStore>,
        refs: Arc<dyn RefStore>,
    ) -> Self {
        let workdir = Workdir::new(&config.work_dir, &config.meta_dir_name);
        Self {
            config,
            store,
            refs,
            workdir,
        }
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn ObjectStore {
        self.store.as_ref()
    }

    pub fn ref_store(&self) -> &dyn RefStore {
        self.refs.as_ref()
    }

    pub fn workdir(&self) -> &Workdir {
        &self.workdir
    }

    // ---- Objects ----

    /// Store `data` as a blob.
    pub fn hash_object(&self, data: &[u8]) -> SdkResult<ObjectId> {
        Ok(self.store.put(data, ObjectKind::Blob)?)
    }

    /// The object a token resolves to, whatever its kind.
    pub fn cat_file(&self, token: &str) -> SdkResult<StoredObject> {
        let id = self.resolve(token)?;
        let object = self
            .store
            .read(&id)?
            .ok_or(strata_store::StoreError::NotFound(id))?;
        Ok(object)
    }

    // ---- Working directory ----

    /// Snapshot the working directory and return its root tree.
    pub fn write_tree(&self) -> SdkResult<ObjectId> {
        Ok(self.workdir.write_tree(self.store.as_ref())?)
    }

    /// Replace the working directory with the tree `token` resolves to.
    pub fn read_tree(&self, token: &str) -> SdkResult<ObjectId> {
        let id = self.resolve(token)?;
        self.workdir.restore_tree(self.store.as_ref(), &id)?;
        Ok(id)
    }

    // ---- History ----

    /// Snapshot the working directory and record it as a new commit on top
    /// of HEAD, then move HEAD to it.
    pub fn commit(&self, message: &str) -> SdkResult<ObjectId> {
        let tree = self.write_tree()?;
        let parent = self.head()?;
        let id = store_commit(self.store.as_ref(), &Commit::new(tree, parent, message))?;
        self.refs.set_head(&id)?;
        info!(commit = %id.short_hex(), tree = %tree.short_hex(), "committed");
        Ok(id)
    }

    pub fn get_commit(&self, token: &str) -> SdkResult<Commit> {
        let id = self.resolve(token)?;
        Ok(load_commit(self.store.as_ref(), &id)?)
    }

    /// Walk first-parent history from `start` (HEAD when `None`), newest
    /// first. An empty repository has an empty history.
    pub fn log(&self, start: Option<&str>, limit: Option<usize>) -> SdkResult<Vec<LogEntry>> {
        let mut next = self.resolve_or_head(start)?;
        let mut entries = Vec::new();
        while let Some(id) = next {
            if limit.is_some_and(|n| entries.len() >= n) {
                break;
            }
            let commit = load_commit(self.store.as_ref(), &id)?;
            next = commit.parent;
            entries.push(LogEntry { id, commit });
        }
        Ok(entries)
    }

    /// Restore the tree of the commit `token` resolves to and move HEAD
    /// there. HEAD only moves once the working directory is restored.
    pub fn checkout(&self, token: &str) -> SdkResult<ObjectId> {
        let id = self.resolve(token)?;
        let commit = load_commit(self.store.as_ref(), &id)?;
        self.workdir.restore_tree(self.store.as_ref(), &commit.tree)?;
        self.refs.set_head(&id)?;
        info!(commit = %id.short_hex(), "checked out");
        Ok(id)
    }

    // ---- Refs ----

    /// Create the tag `name` pointing at `target` (HEAD when `None`).
    ///
    /// Fails with [`SdkError::NoResolvableTarget`] when HEAD is wanted but
    /// nothing has been committed yet.
    pub fn create_tag(&self, name: &str, target: Option<&str>) -> SdkResult<ObjectId> {
        let id = self
            .resolve_or_head(target)?
            .ok_or(SdkError::NoResolvableTarget)?;
        if !self.store.exists(&id)? {
            return Err(strata_store::StoreError::NotFound(id).into());
        }
        self.refs.create_tag(name, &id)?;
        info!(tag = name, target = %id.short_hex(), "tag created");
        Ok(id)
    }

    /// Every ref with its target: HEAD first, then `refs/` in name order.
    pub fn refs(&self) -> SdkResult<Vec<(String, Option<ObjectId>)>> {
        Ok(self.refs.iter_refs()?)
    }

    pub fn resolve(&self, token: &str) -> SdkResult<ObjectId> {
        Ok(self.refs.resolve(token)?)
    }

    pub fn head(&self) -> SdkResult<Option<ObjectId>> {
        Ok(self.refs.head()?)
    }

    /// `None`, `@` and `HEAD` read HEAD without requiring it to exist;
    /// anything else must resolve.
    fn resolve_or_head(&self, token: Option<&str>) -> SdkResult<Option<ObjectId>> {
        match token {
            None | Some("@") | Some(HEAD) => self.head(),
            Some(token) => self.resolve(token).map(Some),
        }
    }
}
