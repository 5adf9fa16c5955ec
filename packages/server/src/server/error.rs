//! HTTP error responses.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use thiserror::Error;

use crate::domains::triage::TriageError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was not `{"messages": [string, ...]}`
    #[error("Invalid input format")]
    InvalidInput(String),

    #[error("Internal Server Error")]
    Internal(#[source] anyhow::Error),
}

impl From<TriageError> for ApiError {
    fn from(e: TriageError) -> Self {
        ApiError::Internal(e.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(detail) => {
                tracing::debug!(detail = %detail, "Rejected request body");
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
