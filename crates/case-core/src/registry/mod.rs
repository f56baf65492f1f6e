//! Registro ordenado de páginas de un flujo.
//!
//! El orden de registro ES el orden canónico del wizard: no existe un campo
//! de orden aparte. Cada flujo tiene su propio registro; no hay un mapa
//! global compartido entre flujos.

mod builder;
mod slug;

use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::errors::{FlowError, RegistryError};
use crate::hashing::hash_value;
use crate::page::Page;

pub use builder::RegistryBuilder;
pub use slug::slugify;

/// Segmentos de URL ocupados por rutas propias del caso.
pub const RESERVED_SLUGS: &[&str] = &["print", "download"];

pub struct PageRegistry {
    name: String,
    pages: IndexMap<String, Box<dyn Page>>,
}

impl PageRegistry {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(),
               pages: IndexMap::new() }
    }

    /// Builder declarativo: el orden de las llamadas define el orden de
    /// los pasos.
    pub fn builder(name: &str, schema: case_domain::CaseSchema) -> RegistryBuilder {
        RegistryBuilder::new(name, schema)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Añade una página al final del flujo.
    pub fn register(&mut self, page: Box<dyn Page>) -> Result<(), RegistryError> {
        let slug = page.slug().to_string();
        if RESERVED_SLUGS.contains(&slug.as_str()) {
            return Err(RegistryError::ReservedSlug(slug));
        }
        if self.pages.contains_key(&slug) {
            return Err(RegistryError::DuplicateSlug(slug));
        }
        self.pages.insert(slug, page);
        Ok(())
    }

    /// Slugs en orden de registro.
    pub fn order(&self) -> Vec<&str> {
        self.pages.keys().map(String::as_str).collect()
    }

    pub fn get(&self, slug: &str) -> Result<&dyn Page, FlowError> {
        self.pages
            .get(slug)
            .map(|p| p.as_ref())
            .ok_or_else(|| FlowError::UnknownPage(slug.to_string()))
    }

    pub fn position(&self, slug: &str) -> Option<usize> {
        self.pages.get_index_of(slug)
    }

    pub fn first_slug(&self) -> Option<&str> {
        self.pages.keys().next().map(String::as_str)
    }

    pub fn pages(&self) -> impl Iterator<Item = &dyn Page> {
        self.pages.values().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Resumen estable de la definición (slug, tipo y campos de cada página)
    /// en forma de JSON.
    pub fn summary(&self) -> Value {
        let pages: Vec<Value> = self.pages()
                                    .map(|p| {
                                        let def = p.definition();
                                        json!({
                                            "slug": def.slug,
                                            "title": def.title,
                                            "kind": def.kind,
                                            "fields": def.field_names,
                                        })
                                    })
                                    .collect();
        json!({ "flow": self.name, "pages": pages })
    }

    /// Hash canónico del resumen; cambia si cambia el orden, el tipo o los
    /// campos de cualquier página.
    pub fn definition_hash(&self) -> String {
        hash_value(&self.summary())
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry").field("name", &self.name).field("order", &self.order()).finish()
    }
}
