use std::path::PathBuf;

/// Errors raised inside the file-backed record store.
///
/// These never cross the [`PatientCrud`](crate::PatientCrud) seam as values; the store renders
/// them into the failure status string of an [`Outcome`](crate::Outcome).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid record id: {0}")]
    InvalidId(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("failed to create record directory: {0}")]
    RecordDirCreation(std::io::Error),
    #[error(
        "no free record id in {} after {attempts} attempts",
        collection_dir.display()
    )]
    IdsExhausted {
        collection_dir: PathBuf,
        attempts: usize,
    },
    #[error("failed to write record file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read record file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize record: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize record: {0}")]
    Deserialization(serde_json::Error),
    #[error("record store lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised while resolving startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidInput(String),
    #[error("failed to create record data directory {path}: {source}", path = path.display())]
    DataDirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
