//! The transport client.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use mitra::{validate_type, FieldError};
use mitra_api::{Method, ResponseShape, API_BASE};

use crate::config::{ClientConfig, ConfigError};
use crate::error::ApiError;
use crate::request::RequestDescriptor;

/// Issues catalog requests against one API server.
///
/// The client holds no per-call state: there is no response cache, no
/// request deduplication and no retry. Two identical calls are two
/// independent round trips. `ApiClient` is cheap to clone; the inner
/// `reqwest::Client` shares its connection pool between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let origin = config.origin()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            origin,
        })
    }

    /// Full URL for a descriptor path, without the query string.
    pub fn url(&self, path: &str) -> String {
        format!("{}{API_BASE}{path}", self.origin)
    }

    /// Issue `request` and decode the response as `T`.
    ///
    /// - The request could not be completed → [`ApiError::Transport`].
    /// - Non-2xx status → [`ApiError::Http`] with that status; the body is not read.
    /// - 2xx → the body must be JSON matching `T::shape()`; otherwise
    ///   [`ApiError::Transport`].
    pub async fn call<T: ResponseShape>(&self, request: RequestDescriptor) -> Result<T, ApiError> {
        let url = self.url(&request.path);
        debug!(method = %request.method, %url, "sending request");

        let mut builder = self
            .http
            .request(method(request.method), &url)
            .header(CONTENT_TYPE, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "server returned error status");
            return Err(ApiError::http(status));
        }

        let text = response.text().await?;
        let raw: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::transport(format!("response body is not JSON: {e}")))?;

        let checked = validate_type(&T::shape(), &raw).into_result().map_err(|errors| {
            warn!(%url, errors = errors.len(), "response body failed validation");
            ApiError::transport(format!(
                "response body failed validation: {}",
                describe(&errors)
            ))
        })?;

        serde_json::from_value(checked)
            .map_err(|e| ApiError::transport(format!("could not decode response body: {e}")))
    }
}

fn method(m: Method) -> reqwest::Method {
    match m {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
