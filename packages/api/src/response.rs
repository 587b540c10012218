//! The response envelope and response-body shapes.
//!
//! Response bodies are checked against a declared shape before they are
//! decoded, using the same schema engine that checks form input. A type opts
//! in by implementing [`ResponseShape`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use mitra::schema::{FieldType, Schema, Text};

/// A response type whose JSON body has a declared shape.
pub trait ResponseShape: DeserializeOwned {
    fn shape() -> FieldType;
}

impl<T: ResponseShape> ResponseShape for Vec<T> {
    fn shape() -> FieldType {
        FieldType::array(T::shape())
    }
}

/// The standard `{ success, data?, error?, message? }` wrapper.
///
/// ```json
/// { "success": true, "data": { "id": "…", "mood": 4 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// A successful response with no data, only a message.
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }
}

impl<T: ResponseShape> ResponseShape for ApiResponse<T> {
    fn shape() -> FieldType {
        Schema::new()
            .field("success", FieldType::Boolean)
            .optional("data", T::shape())
            .optional("error", Text::new())
            .optional("message", Text::new())
            .into()
    }
}

/// Body-less acknowledgement, used where the API returns `data: void`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Ack {}

impl ResponseShape for Ack {
    fn shape() -> FieldType {
        Schema::new().into()
    }
}
