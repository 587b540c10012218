//! The normalized error every client call returns.

use mitra_api::PathError;

/// Why a call failed.
///
/// Every failure maps to exactly one of two cases, so callers can branch on
/// the variant (or on [`ApiError::status`]) without reading message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A response arrived but its status was not 2xx.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request could not be completed, or the response body was not
    /// usable: connection refused, DNS failure, timeout, malformed JSON, or a
    /// body that did not match the endpoint's declared shape.
    #[error("{message}")]
    Transport { message: String },
}

impl ApiError {
    /// The HTTP status for [`ApiError::Http`]; `0` for [`ApiError::Transport`].
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Http { status, .. } => *status,
            ApiError::Transport { .. } => 0,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Http { message, .. } | ApiError::Transport { message } => message,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    pub(crate) fn transport(detail: impl std::fmt::Display) -> Self {
        ApiError::Transport {
            message: format!("Network error: {detail}"),
        }
    }

    pub(crate) fn http(status: reqwest::StatusCode) -> Self {
        let message = match status.canonical_reason() {
            Some(reason) => format!("HTTP {}: {reason}", status.as_u16()),
            None => format!("HTTP {}", status.as_u16()),
        };
        ApiError::Http {
            status: status.as_u16(),
            message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::transport(e)
    }
}

/// A request whose path could not be rendered was never sent.
impl From<PathError> for ApiError {
    fn from(e: PathError) -> Self {
        ApiError::transport(e)
    }
}
