//! Handlers HTTP de un flujo.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use case_core::{slugify, FormPayload, PageOutcome, RequestMethod};
use case_domain::CaseId;
use serde_json::{json, Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::FlowState;
use crate::{ANONYMOUS, REMOTE_USER_HEADER};

fn parse_case_id(raw: &str) -> ApiResult<CaseId> {
    raw.parse().map_err(|_| ApiError::NotFound(format!("case '{raw}'")))
}

/// Cuerpo del POST como `FormPayload`. Un cuerpo ausente o que no es
/// form-urlencoded cuenta como envío vacío: el estado lo decide el dispatcher.
fn form_payload(form: Option<Form<Vec<(String, String)>>>) -> FormPayload {
    form.map(|Form(pairs)| FormPayload::from_pairs(pairs)).unwrap_or_default()
}

fn remote_user(headers: &HeaderMap) -> String {
    headers.get(REMOTE_USER_HEADER)
           .and_then(|v| v.to_str().ok())
           .map(str::trim)
           .filter(|v| !v.is_empty())
           .unwrap_or(ANONYMOUS)
           .to_string()
}

/// Traduce el resultado abstracto del core a una respuesta HTTP.
fn respond(state: &FlowState, outcome: PageOutcome) -> ApiResult<Response> {
    match outcome {
        PageOutcome::Render { template, context } => Ok(state.templates.render(&template, &context)?.into_response()),
        PageOutcome::Redirect { url } => Ok(Redirect::to(&url).into_response()),
    }
}

/// Nombre del fichero descargable: `{flujo}_{id}_{título}` slugificado.
pub fn document_filename(flow: &str, case_id: CaseId, title: &str) -> String {
    format!("{}.pdf", slugify(&format!("{flow}_{case_id}_{title}")))
}

pub async fn index(State(state): State<FlowState>) -> ApiResult<Response> {
    let steps: Vec<Value> = state.dispatcher
                                 .registry()
                                 .pages()
                                 .map(|p| json!({ "slug": p.slug(), "title": p.title() }))
                                 .collect();
    let context = json!({
        "flow": state.name(),
        "steps": steps,
        "start_url": state.dispatcher.urls().index_url(),
    });
    respond(&state, PageOutcome::render("index", context))
}

pub async fn start(State(state): State<FlowState>, headers: HeaderMap) -> ApiResult<Response> {
    let owner = remote_user(&headers);
    let outcome = state.dispatcher.start(&owner).await?;
    respond(&state, outcome)
}

pub async fn first_step(State(state): State<FlowState>, Path(case_id): Path<String>) -> ApiResult<Response> {
    let case_id = parse_case_id(&case_id)?;
    let outcome = state.dispatcher.handle(case_id, None, RequestMethod::Read, FormPayload::new()).await?;
    respond(&state, outcome)
}

pub async fn submit_first_step(State(state): State<FlowState>,
                               Path(case_id): Path<String>,
                               form: Option<Form<Vec<(String, String)>>>)
                               -> ApiResult<Response> {
    let case_id = parse_case_id(&case_id)?;
    let payload = form_payload(form);
    let outcome = state.dispatcher.handle(case_id, None, RequestMethod::Submit, payload).await?;
    respond(&state, outcome)
}

pub async fn page(State(state): State<FlowState>, Path((case_id, slug)): Path<(String, String)>) -> ApiResult<Response> {
    let case_id = parse_case_id(&case_id)?;
    let outcome = state.dispatcher
                       .handle(case_id, Some(slug.as_str()), RequestMethod::Read, FormPayload::new())
                       .await?;
    respond(&state, outcome)
}

pub async fn submit_page(State(state): State<FlowState>,
                         Path((case_id, slug)): Path<(String, String)>,
                         form: Option<Form<Vec<(String, String)>>>)
                         -> ApiResult<Response> {
    let case_id = parse_case_id(&case_id)?;
    let payload = form_payload(form);
    let outcome = state.dispatcher.handle(case_id, Some(slug.as_str()), RequestMethod::Submit, payload).await?;
    respond(&state, outcome)
}

/// Vista completa del caso que consume el renderizador de documentos.
pub async fn print(State(state): State<FlowState>, Path(case_id): Path<String>) -> ApiResult<Response> {
    let case_id = parse_case_id(&case_id)?;
    let case = state.dispatcher.store().load(case_id).await?;
    let mut context = match case.to_context(state.schema) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    context.insert("flow".into(), Value::String(state.name().to_string()));
    respond(&state, PageOutcome::render("print", Value::Object(context)))
}

pub async fn download(State(state): State<FlowState>, Path(case_id): Path<String>) -> ApiResult<Response> {
    let case_id = parse_case_id(&case_id)?;
    let case = state.dispatcher.store().load(case_id).await?;
    let Some(document) = case.document() else {
        return Err(ApiError::NotFound(format!("no document for case {case_id}")));
    };
    let filename = document_filename(state.name(), case_id, case.field_str(state.title_field));
    tracing::info!(%case_id, %filename, "serving document");
    let disposition = format!("attachment; filename=\"{filename}\"");
    Ok(([(header::CONTENT_TYPE, "application/pdf".to_string()), (header::CONTENT_DISPOSITION, disposition)],
        document.to_vec()).into_response())
}

/// Resumen de los flujos montados.
pub async fn health(State(flows): State<std::sync::Arc<Vec<Value>>>) -> Json<Value> {
    Json(json!({ "status": "ok", "flows": flows.as_slice() }))
}
