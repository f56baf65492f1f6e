//! Configuración de rutas.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::FlowState;

/// Rutas de un flujo montadas bajo su prefijo.
///
/// `print` y `download` son segmentos estáticos; el registro impide que una
/// página use esos slugs.
pub fn flow_router(state: FlowState) -> Router {
    let prefix = state.prefix().to_string();
    Router::new().route(&format!("{prefix}/"), get(handlers::index).post(handlers::start))
                 .route(&format!("{prefix}/:case_id/"),
                        get(handlers::first_step).post(handlers::submit_first_step))
                 .route(&format!("{prefix}/:case_id/print/"), get(handlers::print))
                 .route(&format!("{prefix}/:case_id/download/"), get(handlers::download))
                 .route(&format!("{prefix}/:case_id/:slug/"),
                        get(handlers::page).post(handlers::submit_page))
                 .with_state(state)
}

fn flow_summary(flow: &FlowState) -> Value {
    let registry = flow.dispatcher.registry();
    json!({
        "name": registry.name(),
        "prefix": flow.prefix(),
        "steps": registry.order(),
        "hash": registry.definition_hash(),
    })
}

/// Router de la aplicación: todos los flujos más `/health`.
pub fn app_router(flows: Vec<FlowState>) -> Router {
    let summaries: Vec<Value> = flows.iter().map(flow_summary).collect();
    let mut app = Router::new().route("/health", get(handlers::health)).with_state(Arc::new(summaries));
    for flow in flows {
        tracing::info!(flow = flow.name(),
                       prefix = flow.prefix(),
                       hash = %flow.dispatcher.registry().definition_hash(),
                       "mounting flow");
        app = app.merge(flow_router(flow));
    }
    app.layer(TraceLayer::new_for_http())
}
