use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("storage read failed: {0}")]
    StorageRead(String),
    #[error("storage write failed: {0}")]
    StorageWrite(String),
    #[error("invalid settings: {0}")]
    Config(#[source] serde_json::Error),
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}
