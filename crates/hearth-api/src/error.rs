use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use hearth_llm::GenerationError;
use hearth_store::StoreError;

/// One entry of a 400 validation response body.
#[derive(Debug, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Unauthorized")]
    AuthRequired,

    #[error("{0}")]
    Conflict(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("validation failed")]
    Validation(Vec<ValidationIssue>),

    /// Provider failure, surfaced as 500 with a per-operation context plus
    /// the underlying provider message. Never retried.
    #[error("{context}: {source}")]
    Generation {
        context: &'static str,
        source: GenerationError,
    },

    /// Unexpected failure (password hashing). Details are logged, not sent.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn generation(context: &'static str) -> impl FnOnce(GenerationError) -> Self {
        move |source| Self::Generation { context, source }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken => Self::Conflict("Username already taken"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::AuthRequired => (StatusCode::UNAUTHORIZED, "Unauthorized").into_response(),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            Self::Validation(issues) => {
                (StatusCode::BAD_REQUEST, Json(issues)).into_response()
            }
            Self::Generation { context, source } => {
                error!("{}: {}", context, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("{}: {}", context, source) })),
                )
                    .into_response()
            }
            Self::Internal(detail) => {
                error!("internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
