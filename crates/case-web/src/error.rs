//! Errores de la capa HTTP y su traducción a códigos de estado.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use case_core::{FlowError, StoreError};
use serde::Serialize;
use thiserror::Error;

use crate::templates::TemplateError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("Document rendering failed: {0}")]
    BadGateway(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Cuerpo de las respuestas de error.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<FlowError> for ApiError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::UnknownPage(_) | FlowError::CaseNotFound(_) => Self::NotFound(err.to_string()),
            FlowError::Store(StoreError::NotFound(_)) => Self::NotFound(err.to_string()),
            FlowError::SubmissionNotAllowed(_) => Self::MethodNotAllowed(err.to_string()),
            FlowError::Render(msg) => Self::BadGateway(msg),
            FlowError::Store(_) | FlowError::Internal(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        FlowError::from(err).into()
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "RENDER_FAILED"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse { error: self.to_string(),
                                   code: code.to_string() };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
