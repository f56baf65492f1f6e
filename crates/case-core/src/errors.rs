//! Errores del controlador de flujo.
//!
//! `RegistryError` agrupa los errores de configuración (fatales al arrancar);
//! `FlowError` los errores por petición; `StoreError` los del colaborador de
//! persistencia.

use case_domain::CaseId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RegistryError {
    #[error("duplicate page slug '{0}'")] DuplicateSlug(String),
    #[error("page '{slug}' references unknown field '{field}'")] InvalidPageConfig { slug: String, field: String },
    #[error("page title '{0}' produces an empty slug")] EmptyTitle(String),
    #[error("flow '{0}' has no pages")] EmptyFlow(String),
    #[error("slug '{0}' is reserved")] ReservedSlug(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    #[error("case not found: {0}")] NotFound(CaseId),
    #[error("storage backend error: {0}")] Backend(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FlowError {
    #[error("unknown page '{0}'")] UnknownPage(String),
    #[error("case not found: {0}")] CaseNotFound(CaseId),
    #[error("page '{0}' does not accept submissions")] SubmissionNotAllowed(String),
    #[error("store: {0}")] Store(StoreError),
    #[error("document rendering failed: {0}")] Render(String),
    #[error("internal: {0}")] Internal(String),
}

impl From<StoreError> for FlowError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::CaseNotFound(id),
            other => Self::Store(other),
        }
    }
}
