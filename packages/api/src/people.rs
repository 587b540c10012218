//! Users and students.

use serde::{Deserialize, Serialize};

use mitra::schema::{FieldType, Number, Schema, Text};
use mitra::Role;

use crate::response::ResponseShape;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ResponseShape for User {
    fn shape() -> FieldType {
        Schema::new()
            .field("id", Text::new())
            .field("name", Text::new())
            .field("email", Text::new())
            .field("role", FieldType::one_of(Role::VALUES))
            .optional("avatar", Text::new())
            .field("createdAt", Text::new())
            .field("updatedAt", Text::new())
            .into()
    }
}

/// A student profile. `risk_score` is a stored placeholder; no code here
/// computes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub grade: String,
    pub parent_id: String,
    pub risk_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_mood_entry: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ResponseShape for Student {
    fn shape() -> FieldType {
        Schema::new()
            .field("id", Text::new())
            .field("name", Text::new())
            .field("age", Number::new().min(0.0).max(255.0).integer())
            .field("grade", Text::new())
            .field("parentId", Text::new())
            .field("riskScore", Number::new().min(0.0).max(10.0))
            .optional("lastMoodEntry", Text::new())
            .field("createdAt", Text::new())
            .field("updatedAt", Text::new())
            .into()
    }
}
