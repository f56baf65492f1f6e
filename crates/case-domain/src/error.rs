use thiserror::Error;

/// Errores del dominio de casos.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Identificador de caso inválido: {0}")]
    InvalidCaseId(String),
    #[error("Campo desconocido en el esquema '{schema}': {field}")]
    UnknownField { schema: String, field: String },
}
