//! La aplicación completa ensamblada como en producción, con un
//! renderizador de prueba en lugar del binario externo.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use case_persistence::StoreConfig;
use case_render::{DocumentRenderer, RenderError};
use case_web::{app_router, JsonTemplateEngine};
use caseflow::{build_flows, FlowStores};
use serde_json::Value;
use tower::ServiceExt;

struct EchoRenderer;

#[async_trait::async_trait]
impl DocumentRenderer for EchoRenderer {
    async fn render_url(&self, url: &str) -> Result<Vec<u8>, RenderError> {
        Ok(format!("PDF of {url}").into_bytes())
    }
}

async fn app(config: &StoreConfig) -> Router {
    let stores = FlowStores::from_config(config).await.unwrap();
    let flows = build_flows(stores, Arc::new(EchoRenderer), "http://public.test", Arc::new(JsonTemplateEngine)).unwrap();
    app_router(flows)
}

async fn send(app: &Router, method: &str, uri: &str, form: Option<&str>) -> axum::response::Response {
    let mut req = Request::builder().method(method).uri(uri);
    if form.is_some() {
        req = req.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    let body = form.map(|f| Body::from(f.to_string())).unwrap_or_else(Body::empty);
    app.clone().oneshot(req.body(body).unwrap()).await.unwrap()
}

fn location(resp: &axum::response::Response) -> String {
    resp.headers()[header::LOCATION].to_str().unwrap().to_string()
}

#[tokio::test]
async fn application_flow_produces_a_downloadable_document() {
    let data_dir = tempfile::tempdir().unwrap();
    let app = app(&StoreConfig { data_dir: Some(data_dir.path().to_path_buf()) }).await;

    let resp = send(&app, "POST", "/case/", None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let first = location(&resp);
    assert!(first.ends_with("/intro/"));
    let case_url = first.trim_end_matches("intro/").to_string();

    let resp = send(&app, "POST", &format!("{case_url}name/"), Some("name=Data+Engineers")).await;
    assert_eq!(location(&resp), format!("{case_url}exemption/"));

    let resp = send(&app, "GET", &format!("{case_url}end/"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "GET", &format!("{case_url}download/"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let id = case_url.trim_start_matches("/case/").trim_end_matches('/');
    assert_eq!(resp.headers()[header::CONTENT_DISPOSITION].to_str().unwrap(),
               format!("attachment; filename=\"application_{id}_data-engineers.pdf\""));
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(),
               format!("PDF of http://public.test/case/{id}/print/"));
    assert!(data_dir.path().join("application").join(format!("{id}.pdf")).exists());
}

#[tokio::test]
async fn both_flows_are_mounted_and_reported() {
    let app = app(&StoreConfig::default()).await;
    let resp = send(&app, "GET", "/health", None).await;
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let health: Value = serde_json::from_slice(&bytes).unwrap();
    let names: Vec<&str> = health["flows"].as_array()
                                          .unwrap()
                                          .iter()
                                          .map(|f| f["name"].as_str().unwrap())
                                          .collect();
    assert_eq!(names, vec!["application", "evaluation"]);

    let resp = send(&app, "POST", "/evaluation/", None).await;
    let case_url = location(&resp).trim_end_matches("intro/").to_string();
    assert!(case_url.starts_with("/evaluation/"));
    // Cada flujo tiene su propio espacio de casos.
    let foreign = case_url.replacen("/evaluation/", "/case/", 1);
    assert_eq!(send(&app, "GET", &foreign, None).await.status(), StatusCode::NOT_FOUND);
}
