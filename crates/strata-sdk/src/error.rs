use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("repository already exists at {0}")]
    RepositoryAlreadyExists(PathBuf),

    #[error("repository not initialized at {0}")]
    NotInitialized(PathBuf),

    #[error("nothing to point at: the repository has no commits yet")]
    NoResolvableTarget,

    #[error("store error: {0}")]
    Store(#[from] strata_store::StoreError),

    #[error("ref error: {0}")]
    Ref(#[from] strata_refs::RefError),

    #[error("working directory error: {0}")]
    Workdir(#[from] strata_workdir::WorkdirError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
