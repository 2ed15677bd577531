//! Axum-specific error types and mappings.
//!
//! This module maps `CoreError` to HTTP status codes and response bodies.
//! Internal details are logged and never sent to the client.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinedex_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Body text for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Nothing to show; the message is meant for the user.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error. The detail is logged only.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body for 404 responses.
#[derive(Serialize)]
struct MessageBody {
    message: String,
}

/// JSON body for 500 responses.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::NotFound(message) => {
                (StatusCode::NOT_FOUND, axum::Json(MessageBody { message })).into_response()
            }
            HttpError::Internal(detail) => {
                tracing::error!(error = %detail, "Error handling movie request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(ErrorBody {
                        error: INTERNAL_ERROR_MESSAGE,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => HttpError::NotFound(msg),
            CoreError::Repository(repo_err) => HttpError::Internal(repo_err.to_string()),
        }
    }
}

/// Query strings are never validated; one that cannot be read is a server error.
impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::Internal(rejection.body_text())
    }
}
