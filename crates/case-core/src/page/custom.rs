use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};

use super::{Page, PageDefinition, PageKind, PageRequest};
use crate::errors::{FlowError, RegistryError};
use crate::model::PageOutcome;

/// Lógica arbitraria de una página personalizada.
pub type ActionHandler = Arc<dyn Fn(PageRequest) -> BoxFuture<'static, Result<PageOutcome, FlowError>> + Send + Sync>;

/// Página cuya lógica la aporta el flujo (típicamente el paso terminal que
/// genera el documento). Lecturas y envíos invocan el mismo handler; el
/// método llega en `PageRequest::method`.
///
/// El handler puede tener efectos (llamar al renderizador, guardar el
/// documento) y debe tolerar re-invocaciones: regenerar y sobrescribir es
/// aceptable, no hay memoización.
#[derive(Clone)]
pub struct CustomActionPage {
    definition: PageDefinition,
    handler: ActionHandler,
}

impl CustomActionPage {
    pub fn new<F, Fut>(title: &str, handler: F) -> Result<Self, RegistryError>
        where F: Fn(PageRequest) -> Fut + Send + Sync + 'static,
              Fut: Future<Output = Result<PageOutcome, FlowError>> + Send + 'static
    {
        let handler: ActionHandler = Arc::new(move |req: PageRequest| handler(req).boxed());
        Ok(Self { definition: PageDefinition::new(title, PageKind::CustomAction)?,
                  handler })
    }

    pub fn with_extra(mut self, extra: serde_json::Value) -> Self {
        self.definition = self.definition.with_extra(extra);
        self
    }
}

impl std::fmt::Debug for CustomActionPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomActionPage").field("definition", &self.definition).finish_non_exhaustive()
    }
}

#[async_trait]
impl Page for CustomActionPage {
    fn definition(&self) -> &PageDefinition {
        &self.definition
    }

    async fn render(&self, req: PageRequest) -> Result<PageOutcome, FlowError> {
        (self.handler)(req).await
    }

    async fn submit(&self, req: PageRequest) -> Result<PageOutcome, FlowError> {
        (self.handler)(req).await
    }
}
