//! case-persistence
//!
//! Store durable de casos sobre el sistema de ficheros, con paridad 1:1
//! respecto a `InMemoryCaseStore` del core.
//!
//! Módulos:
//! - `file`: `JsonFileCaseStore` (un `{id}.json` por caso y `{id}.pdf` para
//!   el documento generado).
//! - `config`: carga de configuración desde .env.
//! - `error`: errores de E/S y serialización mapeados a `StoreError`.

pub mod config;
pub mod error;
pub mod file;

pub use config::{init_dotenv, StoreConfig};
pub use error::FileStoreError;
pub use file::JsonFileCaseStore;
