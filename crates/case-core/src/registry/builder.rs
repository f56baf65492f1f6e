//! Builder declarativo de `PageRegistry`.
//!
//! Cada llamada `add_*` añade un paso al final del flujo. Los errores de
//! configuración (campo inexistente, título vacío, slug duplicado) se
//! acumulan y `build` devuelve el primero; un flujo mal configurado no debe
//! llegar a servir tráfico.
//!
//! ```ignore
//! let registry = PageRegistry::builder("application", schema)
//!     .add_static("Intro")
//!     .add_form("Name", &["name"])
//!     .add_custom_action("End", end_handler)
//!     .build()?;
//! ```

use std::future::Future;

use case_domain::CaseSchema;
use log::debug;
use serde_json::Value;

use super::PageRegistry;
use crate::errors::{FlowError, RegistryError};
use crate::model::PageOutcome;
use crate::page::{CustomActionPage, FormPage, Page, PageRequest, StaticPage};

pub struct RegistryBuilder {
    name: String,
    schema: CaseSchema,
    pages: Vec<Result<Box<dyn Page>, RegistryError>>,
}

impl RegistryBuilder {
    pub fn new(name: &str, schema: CaseSchema) -> Self {
        Self { name: name.to_string(),
               schema,
               pages: Vec::new() }
    }

    /// Esquema contra el que se validan los campos de las páginas de formulario.
    pub fn schema(&self) -> &CaseSchema {
        &self.schema
    }

    fn push<P: Page + 'static>(mut self, page: Result<P, RegistryError>) -> Self {
        self.pages.push(page.map(|p| Box::new(p) as Box<dyn Page>));
        self
    }

    pub fn add_static(self, title: &str) -> Self {
        let page = StaticPage::new(title);
        self.push(page)
    }

    pub fn add_static_with(self, title: &str, extra: Value) -> Self {
        let page = StaticPage::new(title).map(|p| p.with_extra(extra));
        self.push(page)
    }

    pub fn add_form(self, title: &str, field_names: &[&str]) -> Self {
        let page = FormPage::new(title, field_names, &self.schema);
        self.push(page)
    }

    pub fn add_form_with(self, title: &str, field_names: &[&str], extra: Value) -> Self {
        let page = FormPage::new(title, field_names, &self.schema).map(|p| p.with_extra(extra));
        self.push(page)
    }

    /// Página de formulario construida a mano (p.ej. con campos de sólo
    /// lectura); ver `schema()`.
    pub fn add_form_page(self, page: Result<FormPage, RegistryError>) -> Self {
        self.push(page)
    }

    pub fn add_custom_action<F, Fut>(self, title: &str, handler: F) -> Self
        where F: Fn(PageRequest) -> Fut + Send + Sync + 'static,
              Fut: Future<Output = Result<PageOutcome, FlowError>> + Send + 'static
    {
        let page = CustomActionPage::new(title, handler);
        self.push(page)
    }

    /// Cualquier otra implementación de `Page`.
    pub fn add_page<P: Page + 'static>(self, page: P) -> Self {
        self.push(Ok(page))
    }

    pub fn build(self) -> Result<PageRegistry, RegistryError> {
        if self.pages.is_empty() {
            return Err(RegistryError::EmptyFlow(self.name));
        }
        let mut registry = PageRegistry::new(&self.name);
        for page in self.pages {
            registry.register(page?)?;
        }
        debug!("flow '{}' built with pages {:?}", registry.name(), registry.order());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_domain::FieldSpec;
    use serde_json::json;

    fn schema() -> CaseSchema {
        CaseSchema::new("t", vec![FieldSpec::text("name", "Name", 50).required(), FieldSpec::long_text("notes", "Notes")])
    }

    #[test]
    fn builder_preserves_call_order() {
        let registry = PageRegistry::builder("t", schema()).add_static("Intro")
                                                           .add_form("Name", &["name"])
                                                           .add_form_with("Notes", &["notes"], json!({"hint": "x"}))
                                                           .add_custom_action("End", |_req| async {
                                                               Ok::<_, FlowError>(PageOutcome::redirect("/done"))
                                                           })
                                                           .build()
                                                           .unwrap();
        assert_eq!(registry.order(), vec!["intro", "name", "notes", "end"]);
        let notes = registry.get("notes").unwrap().definition();
        assert_eq!(notes.field_names, vec!["notes".to_string()]);
        assert_eq!(notes.extra_context["hint"], json!("x"));
    }

    #[test]
    fn unknown_form_field_fails_build() {
        let err = PageRegistry::builder("t", schema()).add_form("Name", &["name", "age"]).build().unwrap_err();
        assert_eq!(err,
                   RegistryError::InvalidPageConfig { slug: "name".into(),
                                                      field: "age".into() });
    }

    #[test]
    fn colliding_titles_fail_build() {
        let err = PageRegistry::builder("t", schema()).add_static("SCS roles")
                                                      .add_static("scs-roles")
                                                      .build()
                                                      .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateSlug("scs-roles".into()));
    }

    #[test]
    fn empty_flows_and_titles_are_rejected() {
        assert_eq!(PageRegistry::builder("t", schema()).build().unwrap_err(),
                   RegistryError::EmptyFlow("t".into()));
        assert_eq!(PageRegistry::builder("t", schema()).add_static("???").build().unwrap_err(),
                   RegistryError::EmptyTitle("???".into()));
    }

    #[test]
    fn route_names_cannot_be_used_as_pages() {
        let err = PageRegistry::builder("t", schema()).add_static("Intro")
                                                      .add_static("Download")
                                                      .build()
                                                      .unwrap_err();
        assert_eq!(err, RegistryError::ReservedSlug("download".into()));
        let err = PageRegistry::builder("t", schema()).add_form("Print", &["name"]).build().unwrap_err();
        assert_eq!(err, RegistryError::ReservedSlug("print".into()));
    }

    #[test]
    fn read_only_fields_must_exist() {
        let s = schema();
        let builder = PageRegistry::builder("t", s.clone());
        let page = FormPage::new("Notes", &["notes"], builder.schema()).and_then(|p| p.with_read_only(&["ghost"], &s));
        assert!(matches!(builder.add_form_page(page).build(),
                         Err(RegistryError::InvalidPageConfig { field, .. }) if field == "ghost"));
    }
}
