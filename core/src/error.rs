use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is not available: {0}")]
    Unavailable(String),
    #[error("Storage rejected the write: {0}")]
    WriteRejected(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Could not serialize saved games")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StoreError>;
