//! Standard error response body.

use serde::{Deserialize, Serialize};

use mitra::FieldError;

/// The JSON body returned for all error responses.
///
/// ```json
/// { "error": "request body failed validation", "code": "validation_failed",
///   "fields": [ { "path": "mood", "message": "Mood must be between 1 and 5" } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable description of the problem.
    pub error: String,

    /// Machine-readable error code.
    ///
    /// | `code` | HTTP status |
    /// |--------|------------|
    /// | `invalid_json` | 400 |
    /// | `invalid_parameter` | 400 |
    /// | `not_found` | 404 |
    /// | `validation_failed` | 422 |
    /// | `internal_error` | 500 |
    pub code: String,

    /// Per-field violations; present only for `validation_failed`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a static code and message.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
            fields: Vec::new(),
        }
    }

    /// A `validation_failed` body listing each violated field.
    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self {
            code: codes::VALIDATION_FAILED.into(),
            error: "request body failed validation".into(),
            fields,
        }
    }
}

/// Well-known error codes.
pub mod codes {
    pub const INVALID_JSON: &str = "invalid_json";
    pub const INVALID_PARAMETER: &str = "invalid_parameter";
    pub const NOT_FOUND: &str = "not_found";
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const INTERNAL_ERROR: &str = "internal_error";
}
