//! Ensamblado de la aplicación: store, renderizador, flujos y router.

use std::sync::Arc;

use axum::Router;
use case_core::{CaseStore, FlowDispatcher, InMemoryCaseStore, PageRegistry, UrlScheme};
use case_flows::{application_flow, evaluation_flow, FlowDescriptor, APPLICATION, EVALUATION};
use case_persistence::{JsonFileCaseStore, StoreConfig};
use case_render::{CommandRenderer, DocumentRenderer, RenderConfig, RenderPolicy};
use case_web::{app_router, FlowState, JsonTemplateEngine, TemplateEngine};

use crate::config::AppConfig;
use crate::errors::AppResult;

/// Store de un flujo: `{data_dir}/{flujo}` si hay directorio de datos, en
/// memoria si no. Cada flujo tiene su propio espacio de casos.
pub async fn build_store(config: &StoreConfig, flow: &FlowDescriptor) -> AppResult<Arc<dyn CaseStore>> {
    let store: Arc<dyn CaseStore> = match &config.data_dir {
        Some(dir) => Arc::new(JsonFileCaseStore::open(dir.join(flow.name)).await?),
        None => {
            tracing::warn!(flow = flow.name, "CASEFLOW_DATA_DIR not set: cases are kept in memory");
            Arc::new(InMemoryCaseStore::new())
        }
    };
    Ok(store)
}

/// Stores de todos los flujos.
#[derive(Clone)]
pub struct FlowStores {
    pub application: Arc<dyn CaseStore>,
    pub evaluation: Arc<dyn CaseStore>,
}

impl FlowStores {
    pub fn in_memory() -> Self {
        Self { application: Arc::new(InMemoryCaseStore::new()),
               evaluation: Arc::new(InMemoryCaseStore::new()) }
    }

    pub async fn from_config(config: &StoreConfig) -> AppResult<Self> {
        Ok(Self { application: build_store(config, &APPLICATION).await?,
                  evaluation: build_store(config, &EVALUATION).await? })
    }
}

pub fn build_renderer(config: &RenderConfig) -> Arc<dyn DocumentRenderer> {
    Arc::new(RenderPolicy::from_config(CommandRenderer::new(&config.bin), config))
}

fn mount(flow: FlowDescriptor,
         registry: PageRegistry,
         store: Arc<dyn CaseStore>,
         templates: Arc<dyn TemplateEngine>)
         -> FlowState {
    let dispatcher = FlowDispatcher::new(registry, UrlScheme::new(flow.prefix), store);
    FlowState::new(dispatcher, flow.schema(), flow.title_field, templates)
}

/// Construye todos los flujos. Un flujo mal definido aborta el arranque.
pub fn build_flows(stores: FlowStores,
                   renderer: Arc<dyn DocumentRenderer>,
                   public_url: &str,
                   templates: Arc<dyn TemplateEngine>)
                   -> AppResult<Vec<FlowState>> {
    let application = application_flow(renderer, public_url)?;
    let evaluation = evaluation_flow()?;
    Ok(vec![mount(APPLICATION, application, stores.application, Arc::clone(&templates)),
            mount(EVALUATION, evaluation, stores.evaluation, templates)])
}

pub async fn build_app(config: &AppConfig) -> AppResult<Router> {
    let stores = FlowStores::from_config(&config.store).await?;
    let renderer = build_renderer(&config.render);
    let flows = build_flows(stores, renderer, &config.public_url, Arc::new(JsonTemplateEngine))?;
    Ok(app_router(flows))
}
