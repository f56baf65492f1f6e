//! Punto de entrada del wizard: resuelve una petición (caso, slug) a una
//! página y a su contexto de navegación, y delega según sea lectura o envío.

use std::sync::Arc;

use case_domain::CaseId;
use log::{debug, info};

use crate::errors::FlowError;
use crate::model::{FormPayload, PageOutcome, RequestMethod};
use crate::navigation::{compute_navigation, NavigationContext, UrlScheme};
use crate::page::PageRequest;
use crate::registry::PageRegistry;
use crate::store::CaseStore;

/// Dispatcher de un flujo concreto. Se construye una vez por flujo y se
/// comparte por referencia (`Arc`) entre peticiones; no guarda estado de
/// sesión.
pub struct FlowDispatcher {
    registry: PageRegistry,
    urls: UrlScheme,
    store: Arc<dyn CaseStore>,
}

impl FlowDispatcher {
    pub fn new(registry: PageRegistry, urls: UrlScheme, store: Arc<dyn CaseStore>) -> Self {
        Self { registry, urls, store }
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn urls(&self) -> &UrlScheme {
        &self.urls
    }

    pub fn store(&self) -> &Arc<dyn CaseStore> {
        &self.store
    }

    fn resolve_slug<'a>(&'a self, slug: Option<&'a str>) -> Result<&'a str, FlowError> {
        match slug {
            Some(s) => Ok(s),
            None => self.registry.first_slug().ok_or_else(|| FlowError::UnknownPage(String::new())),
        }
    }

    /// Crea un caso nuevo y redirige al primer paso del flujo.
    pub async fn start(&self, owner: &str) -> Result<PageOutcome, FlowError> {
        let first = self.resolve_slug(None)?;
        let case = self.store.create(owner).await?;
        info!("flow '{}' started case {} for {}", self.registry.name(), case.id(), owner);
        Ok(PageOutcome::redirect(self.urls.page_url(case.id(), first)))
    }

    /// Navegación de `slug` (o del primer paso si es `None`) para un caso.
    pub fn navigation(&self, case_id: CaseId, slug: Option<&str>) -> Result<NavigationContext, FlowError> {
        let slug = self.resolve_slug(slug)?;
        compute_navigation(&self.registry, &self.urls, case_id, slug)
    }

    /// Atiende una petición del wizard.
    ///
    /// Orden de validación: slug registrado (`UnknownPage`), caso existente
    /// (`CaseNotFound`); después se calcula la navegación y se delega en la
    /// página.
    pub async fn handle(&self,
                        case_id: CaseId,
                        slug: Option<&str>,
                        method: RequestMethod,
                        payload: FormPayload)
                        -> Result<PageOutcome, FlowError> {
        let slug = self.resolve_slug(slug)?;
        let page = self.registry.get(slug)?;
        let case = self.store.load(case_id).await?;
        let navigation = compute_navigation(&self.registry, &self.urls, case_id, slug)?;
        debug!("dispatch {:?} {}:{} for case {}", method, self.registry.name(), slug, case_id);

        let req = PageRequest { case,
                                navigation,
                                method,
                                payload,
                                store: Arc::clone(&self.store) };
        match method {
            RequestMethod::Read => page.render(req).await,
            RequestMethod::Submit => page.submit(req).await,
        }
    }
}

impl std::fmt::Debug for FlowDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowDispatcher")
         .field("registry", &self.registry)
         .field("urls", &self.urls)
         .finish_non_exhaustive()
    }
}
