use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use case_core::{CaseStore, FlowDispatcher, FlowError, InMemoryCaseStore, PageOutcome, PageRegistry, UrlScheme};
use case_domain::{evaluation, CaseId};
use case_web::{app_router, FlowState, JsonTemplateEngine};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app(store: Arc<InMemoryCaseStore>) -> Router {
    let registry = PageRegistry::builder("evaluation", evaluation::schema().clone())
        .add_static("intro")
        .add_form("name", &["name"])
        .add_custom_action("end", |req| async move {
            req.store.save_document(req.case.id(), b"%PDF-test".to_vec()).await?;
            Ok::<_, FlowError>(PageOutcome::render("end", req.case.to_context(evaluation::schema())))
        })
        .build()
        .unwrap();
    let dispatcher = FlowDispatcher::new(registry, UrlScheme::new("/evaluation"), store);
    app_router(vec![FlowState::new(dispatcher,
                                   evaluation::schema(),
                                   evaluation::TITLE_FIELD,
                                   Arc::new(JsonTemplateEngine))])
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone().oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> axum::response::Response {
    app.clone()
       .oneshot(Request::builder().method("POST")
                                  .uri(uri)
                                  .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                                  .body(Body::from(body.to_string()))
                                  .unwrap())
       .await
       .unwrap()
}

async fn post_empty(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
       .oneshot(Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap())
       .await
       .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(resp: &axum::response::Response) -> String {
    resp.headers()[header::LOCATION].to_str().unwrap().to_string()
}

async fn started_case(app: &Router) -> CaseId {
    let resp = app.clone()
                  .oneshot(Request::builder().method("POST")
                                             .uri("/evaluation/")
                                             .header("x-remote-user", "alice@example.org")
                                             .body(Body::empty())
                                             .unwrap())
                  .await
                  .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let url = location(&resp);
    url.trim_start_matches("/evaluation/").split('/').next().unwrap().parse().unwrap()
}

#[tokio::test]
async fn index_lists_the_steps() {
    let app = test_app(Arc::new(InMemoryCaseStore::new()));
    let resp = get(&app, "/evaluation/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["template"], "index");
    assert_eq!(body["context"]["steps"][1]["slug"], "name");
}

#[tokio::test]
async fn start_creates_a_case_for_the_remote_user() {
    let store = Arc::new(InMemoryCaseStore::new());
    let app = test_app(store.clone());
    let id = started_case(&app).await;
    assert_eq!(store.load(id).await.unwrap().owner(), "alice@example.org");

    let resp = get(&app, &format!("/evaluation/{id}/")).await;
    let body = json_body(resp).await;
    assert_eq!(body["template"], "intro");
    assert_eq!(body["context"]["next_url"], json!(format!("/evaluation/{id}/name/")));
}

#[tokio::test]
async fn form_submission_validates_then_redirects() {
    let store = Arc::new(InMemoryCaseStore::new());
    let app = test_app(store.clone());
    let id = started_case(&app).await;
    let url = format!("/evaluation/{id}/name/");

    let resp = post_form(&app, &url, "name=").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["context"]["errors"]["name"][0], "This field is required.");

    let resp = post_form(&app, &url, "name=Quarterly+review").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/evaluation/{id}/end/"));
    assert_eq!(store.load(id).await.unwrap().field_str("name"), "Quarterly review");
}

#[tokio::test]
async fn errors_map_to_http_statuses() {
    let app = test_app(Arc::new(InMemoryCaseStore::new()));
    let id = started_case(&app).await;

    assert_eq!(get(&app, &format!("/evaluation/{id}/ghost/")).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/evaluation/not-a-uuid/intro/").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, &format!("/evaluation/{}/intro/", CaseId::new())).await.status(),
               StatusCode::NOT_FOUND);
    let resp = post_form(&app, &format!("/evaluation/{id}/intro/"), "").await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json_body(resp).await["code"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn bodyless_posts_reach_the_dispatcher() {
    let app = test_app(Arc::new(InMemoryCaseStore::new()));
    let id = started_case(&app).await;

    assert_eq!(post_empty(&app, &format!("/evaluation/{id}/intro/")).await.status(),
               StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(post_empty(&app, &format!("/evaluation/{id}/")).await.status(),
               StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(post_empty(&app, &format!("/evaluation/{id}/ghost/")).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(post_empty(&app, &format!("/evaluation/{}/name/", CaseId::new())).await.status(),
               StatusCode::NOT_FOUND);

    let resp = post_empty(&app, &format!("/evaluation/{id}/name/")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["context"]["errors"]["name"][0], "This field is required.");
}

#[tokio::test]
async fn download_serves_the_generated_document() {
    let store = Arc::new(InMemoryCaseStore::new());
    let app = test_app(store.clone());
    let id = started_case(&app).await;
    post_form(&app, &format!("/evaluation/{id}/name/"), "name=Team+Alpha").await;

    let download = format!("/evaluation/{id}/download/");
    assert_eq!(get(&app, &download).await.status(), StatusCode::NOT_FOUND);

    assert_eq!(get(&app, &format!("/evaluation/{id}/end/")).await.status(), StatusCode::OK);
    let resp = get(&app, &download).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(resp.headers()[header::CONTENT_DISPOSITION].to_str().unwrap(),
               format!("attachment; filename=\"evaluation_{id}_team-alpha.pdf\""));
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-test");
}

#[tokio::test]
async fn print_view_exposes_the_whole_case() {
    let app = test_app(Arc::new(InMemoryCaseStore::new()));
    let id = started_case(&app).await;
    post_form(&app, &format!("/evaluation/{id}/name/"), "name=Print+me").await;

    let body = json_body(get(&app, &format!("/evaluation/{id}/print/")).await).await;
    assert_eq!(body["template"], "print");
    assert_eq!(body["context"]["id"], json!(id.to_string()));
    assert_eq!(body["context"]["name"], "Print me");
    assert_eq!(body["context"]["description"], Value::Null);
    assert_eq!(body["context"]["flow"], "evaluation");
}

#[tokio::test]
async fn health_reports_mounted_flows() {
    let app = test_app(Arc::new(InMemoryCaseStore::new()));
    let body = json_body(get(&app, "/health").await).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["flows"][0]["name"], "evaluation");
    assert_eq!(body["flows"][0]["steps"], json!(["intro", "name", "end"]));
    assert_eq!(body["flows"][0]["hash"].as_str().map(str::len), Some(64));
}
