//! Store de casos en ficheros JSON.
//!
//! Layout bajo `root`:
//! - `{id}.json`: el caso serializado (sin documento).
//! - `{id}.pdf`: el último documento generado, si existe.
//!
//! Toda escritura va a un `.tmp` y luego se renombra, así un fallo a mitad
//! de escritura nunca deja un fichero truncado. Las escrituras de este
//! proceso se serializan con un mutex; entre procesos gana la última.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use case_core::{CaseStore, StoreError};
use case_domain::{Case, CaseId};
use log::{debug, info};
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::FileStoreError;

#[derive(Debug)]
pub struct JsonFileCaseStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> FileStoreError + '_ {
    move |source| FileStoreError::Io { path: path.display().to_string(),
                                       source }
}

fn corrupt(path: &Path) -> impl FnOnce(serde_json::Error) -> FileStoreError + '_ {
    move |source| FileStoreError::Corrupt { path: path.display().to_string(),
                                            source }
}

impl JsonFileCaseStore {
    /// Abre (y crea si hace falta) el directorio de datos.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, FileStoreError> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(io_err(&root))?;
        info!("file case store at {}", root.display());
        Ok(Self { root,
                  write_lock: Mutex::new(()) })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn case_path(&self, id: CaseId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    fn document_path(&self, id: CaseId) -> PathBuf {
        self.root.join(format!("{id}.pdf"))
    }

    /// `{id}.json` -> `{id}.json.tmp`; cada destino tiene su propio temporal.
    fn tmp_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), FileStoreError> {
        let tmp_path = Self::tmp_path(path);
        fs::write(&tmp_path, bytes).await.map_err(io_err(&tmp_path))?;
        fs::rename(&tmp_path, path).await.map_err(io_err(path))?;
        Ok(())
    }

    async fn write_case(&self, case: &Case) -> Result<(), FileStoreError> {
        let path = self.case_path(case.id());
        let bytes = serde_json::to_vec_pretty(case).map_err(corrupt(&path))?;
        Self::write_atomic(&path, &bytes).await
    }

    async fn read_case(&self, id: CaseId) -> Result<Case, FileStoreError> {
        let path = self.case_path(id);
        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(FileStoreError::NotFound(id)),
            Err(e) => return Err(io_err(&path)(e)),
        };
        let case: Case = serde_json::from_slice(&raw).map_err(corrupt(&path))?;
        let doc_path = self.document_path(id);
        match fs::read(&doc_path).await {
            Ok(bytes) => Ok(case.with_document(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(case),
            Err(e) => Err(io_err(&doc_path)(e)),
        }
    }
}

#[async_trait]
impl CaseStore for JsonFileCaseStore {
    async fn create(&self, owner: &str) -> Result<Case, StoreError> {
        let _guard = self.write_lock.lock().await;
        let case = Case::new(owner);
        self.write_case(&case).await?;
        info!("created case {} for {}", case.id(), owner);
        Ok(case)
    }

    async fn load(&self, id: CaseId) -> Result<Case, StoreError> {
        Ok(self.read_case(id).await?)
    }

    async fn save_fields(&self, id: CaseId, values: Map<String, Value>) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut case = self.read_case(id).await?;
        debug!("case {}: saving fields {:?}", id, values.keys().collect::<Vec<_>>());
        case.apply_fields(values);
        self.write_case(&case).await?;
        Ok(())
    }

    async fn save_document(&self, id: CaseId, bytes: Vec<u8>) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut case = self.read_case(id).await?;
        Self::write_atomic(&self.document_path(id), &bytes).await?;
        debug!("case {}: stored document ({} bytes)", id, bytes.len());
        case.set_document(bytes);
        self.write_case(&case).await?;
        Ok(())
    }
}
