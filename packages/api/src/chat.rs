//! Chat sessions and messages.

use serde::{Deserialize, Serialize};

use mitra::schema::{FieldType, Number, Schema, Text};
use mitra::RiskLevel;

use crate::response::ResponseShape;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Student,
    Ai,
    Counselor,
}

impl Sender {
    pub const VALUES: &'static [&'static str] = &["student", "ai", "counselor"];
}

/// Annotations a reviewer may attach to a message. All optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_indicators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_required: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl ResponseShape for ChatMessage {
    fn shape() -> FieldType {
        let metadata = Schema::new()
            .optional("sentiment", Number::new())
            .optional("riskIndicators", FieldType::array(Text::new()))
            .optional("followUpRequired", FieldType::Boolean);
        Schema::new()
            .field("id", Text::new())
            .field("sessionId", Text::new())
            .field("sender", FieldType::one_of(Sender::VALUES))
            .field("content", Text::new())
            .field("timestamp", Text::new())
            .optional("metadata", metadata)
            .into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub student_id: String,
    pub started_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
}

impl ResponseShape for ChatSession {
    fn shape() -> FieldType {
        Schema::new()
            .field("id", Text::new())
            .field("studentId", Text::new())
            .field("startedAt", Text::new())
            .optional("endedAt", Text::new())
            .with_default(
                "messages",
                FieldType::array(ChatMessage::shape()),
                serde_json::json!([]),
            )
            .optional("summary", Text::new())
            .optional("riskLevel", FieldType::one_of(RiskLevel::VALUES))
            .into()
    }
}
