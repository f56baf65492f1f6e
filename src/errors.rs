//! Errores de arranque de la aplicación.

use case_core::RegistryError;
use case_persistence::FileStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Flujo mal configurado: {0}")]
    Registry(#[from] RegistryError),
    #[error("Error de almacenamiento: {0}")]
    Store(#[from] FileStoreError),
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
