use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use lumen_schema::ValidationError;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error as ThisError;

use crate::store::ResourceKind;

#[derive(Debug, ThisError)]
pub enum LumenError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: i64 },

    #[error("Store actor error: {0}")]
    Store(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<JsonRejection> for LumenError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(e) => LumenError::InvalidJson(e.body_text()),
            JsonRejection::BytesRejection(e) => {
                LumenError::Unexpected(format!("Failed to read request body: {e}"))
            }
            other => LumenError::InvalidRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for LumenError {
    fn from(rejection: PathRejection) -> Self {
        LumenError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for LumenError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            LumenError::InvalidJson(reason) => {
                tracing::warn!(%reason, "Request rejected: invalid JSON");
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorObject {
                        code: "INVALID_JSON".to_string(),
                        message: "Request body is not valid JSON.".to_string(),
                        details: None,
                    },
                )
            }

            LumenError::InvalidRequest(reason) => {
                tracing::warn!(%reason, "Request rejected: invalid shape");
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorObject {
                        code: "INVALID_REQUEST".to_string(),
                        message: "Invalid request.".to_string(),
                        details: Some(Value::String(reason)),
                    },
                )
            }

            LumenError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "VALIDATION_FAILED".to_string(),
                    message: err.to_string(),
                    details: Some(json!({ "field": err.field })),
                },
            ),

            LumenError::NotFound { kind, id } => (
                StatusCode::NOT_FOUND,
                ApiErrorObject {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{kind} {id} not found."),
                    details: None,
                },
            ),

            LumenError::Store(_) | LumenError::Unexpected(_) => {
                tracing::error!(error = %self, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorObject {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                        details: None,
                    },
                )
            }
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Debug, Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
