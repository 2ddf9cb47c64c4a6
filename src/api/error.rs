//! Mapping of domain errors onto HTTP responses

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Error;

/// Error payload returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Character not found")]
    pub error: String,
    /// Present on not-found responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "60d5ecb74b24c72b8c8b4567")]
    pub id: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody {
                error: "Character not found".to_string(),
                id: Some(id.into()),
            },
        }
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: msg.into(),
                id: None,
            },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::CharacterNotFound(id) => {
                tracing::debug!(%id, "Character not found");
                ApiError::not_found(id)
            }
            Error::InvalidRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected request body");
                ApiError::bad_request(msg)
            }
            Error::StorageUnavailable(_) => {
                tracing::error!(error = %err, "Storage unavailable");
                ApiError::service_unavailable(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Turn a handler panic into a 500 response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(%detail, "Handler panicked");
    ApiError::internal("Internal server error").into_response()
}
