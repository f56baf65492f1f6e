//! Paridad del store en ficheros con el store en memoria.

use case_core::{CaseStore, StoreError};
use case_domain::CaseId;
use case_persistence::JsonFileCaseStore;
use serde_json::{json, Map};

fn fields(pairs: &[(&str, serde_json::Value)]) -> Map<String, serde_json::Value> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[tokio::test]
async fn create_then_load_returns_the_same_case() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileCaseStore::open(dir.path()).await.unwrap();
    let case = store.create("alice").await.unwrap();
    let loaded = store.load(case.id()).await.unwrap();
    assert_eq!(loaded.id(), case.id());
    assert_eq!(loaded.owner(), "alice");
    assert!(loaded.fields().is_empty());
    assert_eq!(loaded.document(), None);
}

#[tokio::test]
async fn save_fields_is_partial_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let id = {
        let store = JsonFileCaseStore::open(dir.path()).await.unwrap();
        let case = store.create("bob").await.unwrap();
        store.save_fields(case.id(), fields(&[("name", json!("Hire")), ("grade", json!("g7"))])).await.unwrap();
        store.save_fields(case.id(), fields(&[("name", json!("Hire two"))])).await.unwrap();
        case.id()
    };

    let reopened = JsonFileCaseStore::open(dir.path()).await.unwrap();
    let case = reopened.load(id).await.unwrap();
    assert_eq!(case.field("name"), Some(&json!("Hire two")));
    assert_eq!(case.field("grade"), Some(&json!("g7")));
}

#[tokio::test]
async fn document_is_replaced_and_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileCaseStore::open(dir.path()).await.unwrap();
    let case = store.create("carol").await.unwrap();
    store.save_document(case.id(), b"first".to_vec()).await.unwrap();
    store.save_document(case.id(), b"second".to_vec()).await.unwrap();
    assert_eq!(store.load(case.id()).await.unwrap().document(), Some(&b"second"[..]));
}

#[tokio::test]
async fn missing_cases_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileCaseStore::open(dir.path()).await.unwrap();
    let id = CaseId::new();
    assert_eq!(store.load(id).await.unwrap_err(), StoreError::NotFound(id));
    assert_eq!(store.save_fields(id, Map::new()).await.unwrap_err(), StoreError::NotFound(id));
    assert_eq!(store.save_document(id, vec![1]).await.unwrap_err(), StoreError::NotFound(id));
}

#[tokio::test]
async fn corrupt_files_surface_as_backend_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileCaseStore::open(dir.path()).await.unwrap();
    let id = CaseId::new();
    std::fs::write(dir.path().join(format!("{id}.json")), b"{not json").unwrap();
    assert!(matches!(store.load(id).await, Err(StoreError::Backend(msg)) if msg.contains("corrupt")));
}
