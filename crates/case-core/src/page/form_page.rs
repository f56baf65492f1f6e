use async_trait::async_trait;
use case_domain::{CaseSchema, DomainError};
use log::{debug, warn};
use serde_json::{json, Map, Value};

use super::{Page, PageDefinition, PageKind, PageRequest};
use crate::errors::{FlowError, RegistryError};
use crate::form::{build_validator, Validator};
use crate::model::PageOutcome;

/// Página ligada a un subconjunto de campos del caso.
///
/// Lectura: proyecta el caso sobre sus campos (más `id` y los campos de sólo
/// lectura declarados). Envío: valida con el validador estrecho y guarda
/// únicamente esos campos; si la validación falla re-pinta la misma página
/// con el payload enviado y los errores por campo.
#[derive(Debug, Clone)]
pub struct FormPage {
    definition: PageDefinition,
    validator: Validator,
    read_only: Vec<String>,
}

fn invalid_config(slug: &str, err: DomainError) -> RegistryError {
    match err {
        DomainError::UnknownField { field, .. } => RegistryError::InvalidPageConfig { slug: slug.to_string(), field },
        other => RegistryError::InvalidPageConfig { slug: slug.to_string(),
                                                    field: other.to_string() },
    }
}

impl FormPage {
    /// Falla con `InvalidPageConfig` si algún campo no existe en `schema`.
    pub fn new(title: &str, field_names: &[&str], schema: &CaseSchema) -> Result<Self, RegistryError> {
        let mut definition = PageDefinition::new(title, PageKind::BoundForm)?;
        let validator = build_validator(schema, field_names).map_err(|e| invalid_config(&definition.slug, e))?;
        definition.field_names = validator.field_names().map(str::to_string).collect();
        Ok(Self { definition,
                  validator,
                  read_only: Vec::new() })
    }

    pub fn with_extra(mut self, extra: Value) -> Self {
        self.definition = self.definition.with_extra(extra);
        self
    }

    /// Campos mostrados sin poder editarse (p.ej. el nombre del caso como
    /// cabecera). También deben existir en el esquema.
    pub fn with_read_only(mut self, fields: &[&str], schema: &CaseSchema) -> Result<Self, RegistryError> {
        for f in fields {
            schema.require_field(f).map_err(|e| invalid_config(&self.definition.slug, e))?;
            if !self.read_only.iter().any(|r| r == f) {
                self.read_only.push(f.to_string());
            }
        }
        Ok(self)
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    fn projected_fields(&self) -> impl Iterator<Item = &str> {
        self.definition
            .field_names
            .iter()
            .chain(self.read_only.iter())
            .map(String::as_str)
    }

    fn form_context(&self, req: &PageRequest, data: Value, errors: Value) -> Value {
        let mut head = Map::new();
        head.insert("errors".into(), errors);
        head.insert("data".into(), data);
        self.definition.context(head, &req.navigation)
    }
}

#[async_trait]
impl Page for FormPage {
    fn definition(&self) -> &PageDefinition {
        &self.definition
    }

    async fn render(&self, req: PageRequest) -> Result<PageOutcome, FlowError> {
        let data = req.case.project(self.projected_fields());
        let ctx = self.form_context(&req, data, json!({}));
        Ok(PageOutcome::render(&self.definition.template, ctx))
    }

    async fn submit(&self, req: PageRequest) -> Result<PageOutcome, FlowError> {
        match self.validator.validate(&req.payload) {
            Ok(cleaned) => {
                let case_id = req.case.id();
                debug!("page '{}' saving {} field(s) on case {}", self.definition.slug, cleaned.len(), case_id);
                req.store.save_fields(case_id, cleaned).await?;
                let target = req.navigation
                                .next_url
                                .clone()
                                .unwrap_or_else(|| req.navigation.this_url.clone());
                Ok(PageOutcome::redirect(target))
            }
            Err(errors) => {
                warn!("page '{}' rejected submission for case {}: {} invalid field(s)",
                      self.definition.slug,
                      req.case.id(),
                      errors.len());
                let errors = json!(errors);
                let ctx = self.form_context(&req, req.payload.to_json(), errors);
                Ok(PageOutcome::render(&self.definition.template, ctx))
            }
        }
    }
}
