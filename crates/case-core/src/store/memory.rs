use async_trait::async_trait;
use case_domain::{Case, CaseId};
use dashmap::DashMap;
use log::info;
use serde_json::{Map, Value};

use super::CaseStore;
use crate::errors::StoreError;

/// Store en memoria, útil para tests y para arrancar sin directorio de datos.
#[derive(Debug, Default)]
pub struct InMemoryCaseStore {
    cases: DashMap<CaseId, Case>,
}

impl InMemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta (o reemplaza) un caso ya construido.
    pub fn insert(&self, case: Case) {
        self.cases.insert(case.id(), case);
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[async_trait]
impl CaseStore for InMemoryCaseStore {
    async fn create(&self, owner: &str) -> Result<Case, StoreError> {
        let case = Case::new(owner);
        info!("created case {} for {}", case.id(), owner);
        self.cases.insert(case.id(), case.clone());
        Ok(case)
    }

    async fn load(&self, id: CaseId) -> Result<Case, StoreError> {
        self.cases.get(&id).map(|c| c.clone()).ok_or(StoreError::NotFound(id))
    }

    async fn save_fields(&self, id: CaseId, values: Map<String, Value>) -> Result<(), StoreError> {
        let mut entry = self.cases.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.apply_fields(values);
        Ok(())
    }

    async fn save_document(&self, id: CaseId, bytes: Vec<u8>) -> Result<(), StoreError> {
        let mut entry = self.cases.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.set_document(bytes);
        Ok(())
    }
}
