//! Colaborador de persistencia de casos.
//!
//! El core sólo necesita cuatro operaciones sobre la entidad; el motor de
//! almacenamiento concreto queda fuera. Lectura-modificación-escritura no es
//! transaccional: dos envíos concurrentes sobre el mismo caso se resuelven
//! con "gana la última escritura" por campo.

mod memory;

use async_trait::async_trait;
use case_domain::{Case, CaseId};
use serde_json::{Map, Value};

use crate::errors::StoreError;

pub use memory::InMemoryCaseStore;

#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Crea un caso vacío para `owner`.
    async fn create(&self, owner: &str) -> Result<Case, StoreError>;

    async fn load(&self, id: CaseId) -> Result<Case, StoreError>;

    /// Actualización parcial: los campos no incluidos no se tocan.
    async fn save_fields(&self, id: CaseId, values: Map<String, Value>) -> Result<(), StoreError>;

    /// Sustituye el documento generado del caso.
    async fn save_document(&self, id: CaseId, bytes: Vec<u8>) -> Result<(), StoreError>;
}
