use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::models::FailureResponse;

/// Request failures that end in a non-2xx status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input is missing or unusable; detected before any lookup.
    #[error("{message}")]
    Validation { message: String, summary: String },

    /// Anything else. Only `message` reaches the client.
    #[error("{message}")]
    Unexpected {
        message: String,
        summary: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>, summary: impl Into<String>) -> ApiError {
        ApiError::Validation {
            message: message.into(),
            summary: summary.into(),
        }
    }

    /// Wraps `source`, logging it with its full chain.
    pub fn unexpected(
        context: &str,
        summary: impl Into<String>,
        source: anyhow::Error,
    ) -> ApiError {
        tracing::error!("{context}: {source:?}");
        ApiError::Unexpected {
            message: format!("{context}: {source}"),
            summary: summary.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation { message, summary } => FailureResponse::new(message, summary),
            ApiError::Unexpected {
                message, summary, ..
            } => FailureResponse::new(message, summary),
        };
        (status, Json(body)).into_response()
    }
}
