//! HTTP request handlers for all Mitra API endpoints.
//!
//! Each submodule covers a group of catalog endpoints. Handlers are async
//! functions that receive Axum extractors and return
//! `Result<impl IntoResponse, AppError>`. Nothing is persisted: list
//! endpoints answer with empty collections and creates echo the accepted
//! entity back.

pub mod chat;
pub mod people;
pub mod support;
pub mod system;
pub mod wellbeing;

use axum::{
    extract::{FromRequest, Request},
    http::Uri,
    Json,
};
use serde_json::Value;

use mitra::forms::parse;
use mitra::{Form, Validation};

use crate::{config::ServerConfig, error::AppError};

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

/// A request body checked against form `F`'s schema.
///
/// Malformed JSON is rejected with 400; JSON that fails the schema with 422
/// and one entry per violated field.
pub struct FormBody<F>(pub F);

impl<F, S> FromRequest<S> for FormBody<F>
where
    F: Form + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request(
        req: Request,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let raw = Json::<Value>::from_request(req, state);
        async move {
            let Json(raw) = raw.await?;
            match parse::<F>(&raw) {
                Validation::Valid(form) => Ok(FormBody(form)),
                Validation::Invalid(errors) => Err(AppError::Invalid(errors)),
            }
        }
    }
}

/// Fallback for paths outside the catalog.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// A fresh record id.
pub(crate) fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// The current time as an RFC 3339 string.
pub(crate) fn now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
