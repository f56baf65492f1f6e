//! Errores del store en ficheros.
//! Mapea errores de E/S y de serde a variantes semánticas y, en la frontera
//! con el core, a `StoreError`.

use case_core::StoreError;
use case_domain::CaseId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("case not found: {0}")]
    NotFound(CaseId),
    #[error("io error on {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("corrupt case file {path}: {source}")]
    Corrupt { path: String, source: serde_json::Error },
}

impl From<FileStoreError> for StoreError {
    fn from(err: FileStoreError) -> Self {
        match err {
            FileStoreError::NotFound(id) => StoreError::NotFound(id),
            other => StoreError::Backend(other.to_string()),
        }
    }
}
