//! Estado compartido por los handlers de un flujo.

use std::sync::Arc;

use case_core::FlowDispatcher;
use case_domain::CaseSchema;

use crate::templates::TemplateEngine;

#[derive(Clone)]
pub struct FlowState {
    pub dispatcher: Arc<FlowDispatcher>,
    /// Esquema completo del caso (vista de impresión).
    pub schema: &'static CaseSchema,
    /// Campo con el que se nombra el documento descargado.
    pub title_field: &'static str,
    pub templates: Arc<dyn TemplateEngine>,
}

impl FlowState {
    pub fn new(dispatcher: FlowDispatcher,
               schema: &'static CaseSchema,
               title_field: &'static str,
               templates: Arc<dyn TemplateEngine>)
               -> Self {
        Self { dispatcher: Arc::new(dispatcher),
               schema,
               title_field,
               templates }
    }

    pub fn name(&self) -> &str {
        self.dispatcher.registry().name()
    }

    pub fn prefix(&self) -> &str {
        self.dispatcher.urls().prefix()
    }
}
