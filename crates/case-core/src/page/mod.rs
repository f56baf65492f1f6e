//! Variantes de página del wizard.
//!
//! Un paso del flujo es una de tres variantes que comparten el contrato
//! `Page` (render + submit):
//! - `StaticPage`: contenido estático, sólo lectura.
//! - `FormPage`: formulario parcial ligado a un subconjunto de campos del caso.
//! - `CustomActionPage`: lógica arbitraria (p.ej. generar el documento final).

mod custom;
mod definition;
mod form_page;
mod static_page;

use std::sync::Arc;

use async_trait::async_trait;
use case_domain::Case;

use crate::errors::FlowError;
use crate::model::{FormPayload, PageOutcome, RequestMethod};
use crate::navigation::NavigationContext;
use crate::store::CaseStore;

pub use custom::{ActionHandler, CustomActionPage};
pub use definition::{PageDefinition, PageKind};
pub use form_page::FormPage;
pub use static_page::StaticPage;

/// Todo lo que una página necesita para atender una petición.
pub struct PageRequest {
    pub case: Case,
    pub navigation: NavigationContext,
    pub method: RequestMethod,
    pub payload: FormPayload,
    pub store: Arc<dyn CaseStore>,
}

/// Contrato común de las páginas registradas en un flujo.
#[async_trait]
pub trait Page: Send + Sync {
    /// Metadatos inmutables de la página.
    fn definition(&self) -> &PageDefinition;

    fn slug(&self) -> &str {
        &self.definition().slug
    }

    fn title(&self) -> &str {
        &self.definition().title
    }

    fn kind(&self) -> PageKind {
        self.definition().kind
    }

    /// Petición de lectura.
    async fn render(&self, req: PageRequest) -> Result<PageOutcome, FlowError>;

    /// Envío de formulario. Por defecto las páginas no aceptan envíos.
    async fn submit(&self, _req: PageRequest) -> Result<PageOutcome, FlowError> {
        Err(FlowError::SubmissionNotAllowed(self.slug().to_string()))
    }
}
