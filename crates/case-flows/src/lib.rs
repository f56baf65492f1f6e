//! case-flows
//!
//! Flujos concretos montados sobre `case-core`: la solicitud de
//! contratación ("application") y la evaluación ("evaluation").
//!
//! Cada flujo se describe con un `FlowDescriptor` (nombre, prefijo de URL,
//! esquema y campo que titula el documento) y se construye con su función
//! `*_flow`, que devuelve el `PageRegistry` listo para un dispatcher.

pub mod application;
pub mod document;
pub mod evaluation;

use case_domain::CaseSchema;

pub use application::{application_flow, APPLICATION};
pub use document::DocumentAction;
pub use evaluation::{evaluation_flow, EVALUATION};

/// Metadatos estáticos de un flujo.
#[derive(Debug, Clone, Copy)]
pub struct FlowDescriptor {
    pub name: &'static str,
    pub prefix: &'static str,
    pub schema: fn() -> &'static CaseSchema,
    /// Campo "humano" con el que se nombra el documento descargable.
    pub title_field: &'static str,
}

impl FlowDescriptor {
    pub fn schema(&self) -> &'static CaseSchema {
        (self.schema)()
    }
}
