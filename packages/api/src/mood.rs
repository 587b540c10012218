//! Mood tracking records.

use serde::{Deserialize, Serialize};
use serde_json::json;

use mitra::schema::{FieldType, Number, Schema, Text};

use crate::response::ResponseShape;

/// A stored mood entry, as returned by `…/moods` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub student_id: String,
    /// 1 (very sad) to 5 (very happy).
    pub mood: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub factors: Vec<String>,
}

impl ResponseShape for MoodEntry {
    fn shape() -> FieldType {
        Schema::new()
            .field("id", Text::new())
            .field("studentId", Text::new())
            .field(
                "mood",
                Number::new().min(1.0).max_msg(5.0, "Mood must be between 1 and 5").integer(),
            )
            .optional("notes", Text::new())
            .field("timestamp", Text::new())
            .with_default("factors", FieldType::array(Text::new()), json!([]))
            .into()
    }
}
