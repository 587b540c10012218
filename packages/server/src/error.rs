//! Application-level error type returned by handlers.
//!
//! All variants serialise to the [`ErrorResponse`] JSON format and map to the
//! appropriate HTTP status code.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mitra::FieldError;
use mitra_api::{error::codes, ErrorResponse};

/// An error that a handler can return; converts directly to an HTTP response.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// A query-string parameter could not be parsed.
    InvalidParameter(String),
    /// The body was JSON but failed its form schema.
    Invalid(Vec<FieldError>),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(codes::NOT_FOUND, msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(codes::INVALID_JSON, msg))
            }
            AppError::InvalidParameter(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(codes::INVALID_PARAMETER, msg),
            ),
            AppError::Invalid(fields) => {
                tracing::debug!(fields = fields.len(), "request body failed validation");
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::validation(fields))
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(codes::INTERNAL_ERROR, msg),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::InvalidParameter(e.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::BadRequest(format!("malformed JSON body: {e}"))
    }
}
