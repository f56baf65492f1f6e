use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Page, PageDefinition, PageKind, PageRequest};
use crate::errors::{FlowError, RegistryError};
use crate::model::PageOutcome;

/// Página de sólo lectura (introducción, textos de ayuda, cierre).
#[derive(Debug, Clone)]
pub struct StaticPage {
    definition: PageDefinition,
}

impl StaticPage {
    pub fn new(title: &str) -> Result<Self, RegistryError> {
        Ok(Self { definition: PageDefinition::new(title, PageKind::Static)? })
    }

    pub fn with_extra(mut self, extra: Value) -> Self {
        self.definition = self.definition.with_extra(extra);
        self
    }
}

#[async_trait]
impl Page for StaticPage {
    fn definition(&self) -> &PageDefinition {
        &self.definition
    }

    async fn render(&self, req: PageRequest) -> Result<PageOutcome, FlowError> {
        Ok(PageOutcome::render(&self.definition.template, self.definition.context(Map::new(), &req.navigation)))
    }
}
