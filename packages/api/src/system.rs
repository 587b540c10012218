//! Health-check and echo endpoints: `/ping`, `/demo`, `/test`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use mitra::schema::{FieldType, Schema, Text};

use crate::response::ResponseShape;

/// `GET /api/ping`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingResponse {
    pub message: String,
}

impl ResponseShape for PingResponse {
    fn shape() -> FieldType {
        Schema::new().field("message", Text::new()).into()
    }
}

/// `GET|POST /api/demo`
///
/// ```json
/// { "message": "Hello from Express server - POST request", "receivedData": { … }, "timestamp": "…" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DemoResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_data: Option<Value>,
    pub timestamp: String,
}

impl ResponseShape for DemoResponse {
    fn shape() -> FieldType {
        Schema::new()
            .field("message", Text::new())
            .optional("receivedData", FieldType::Any)
            .field("timestamp", Text::new())
            .into()
    }
}

/// `GET|POST|PUT|PATCH|DELETE /api/test`
///
/// `query` is present only when the request had query parameters; `body`
/// only for POST, PUT and PATCH requests that carried one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResponse {
    pub success: bool,
    pub method: String,
    pub timestamp: String,
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    pub message: String,
}

impl ResponseShape for TestResponse {
    fn shape() -> FieldType {
        Schema::new()
            .field("success", FieldType::Boolean)
            .field("method", Text::new())
            .field("timestamp", Text::new())
            .field("endpoint", Text::new())
            .optional("query", FieldType::Any)
            .optional("body", FieldType::Any)
            .field("message", Text::new())
            .into()
    }
}
