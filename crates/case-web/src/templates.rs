//! Colaborador de plantillas.
//!
//! El motor recibe el nombre de plantilla y el contexto JSON que produce el
//! core. `JsonTemplateEngine` devuelve ese par tal cual como JSON, útil
//! para clientes que pintan por su cuenta y para tests.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{0}' not found")]
    NotFound(String),
    #[error("template '{template}' failed: {reason}")]
    Render { template: String, reason: String },
}

/// Página ya pintada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub content_type: String,
    pub body: String,
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template: &str, context: &Value) -> Result<RenderedPage, TemplateError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTemplateEngine;

impl TemplateEngine for JsonTemplateEngine {
    fn render(&self, template: &str, context: &Value) -> Result<RenderedPage, TemplateError> {
        let body = serde_json::to_string(&json!({ "template": template, "context": context }))
            .map_err(|e| TemplateError::Render { template: template.to_string(),
                                                 reason: e.to_string() })?;
        Ok(RenderedPage { content_type: "application/json".to_string(),
                          body })
    }
}
