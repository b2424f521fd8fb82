use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use knowledge_persist::PersistError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Storage failure; `context` is the generic message shown to the caller
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: PersistError,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Adapter for `map_err` that tags a storage error with the route's generic message.
    ///
    /// A taken username becomes `Conflict`.
    pub fn storage(context: &'static str) -> impl FnOnce(PersistError) -> Self {
        move |source| match source {
            PersistError::UsernameTaken(username) => {
                Self::Conflict(format!("Username already taken: {}", username))
            }
            source => Self::Storage { context, source },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Storage { source: PersistError::NotFound { entity, .. }, .. } => {
                (StatusCode::NOT_FOUND, format!("{} not found", entity))
            }
            ApiError::Storage { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
