//! Notifications, crisis contacts and coaching resources.

use serde::{Deserialize, Serialize};

use mitra::schema::{FieldType, Schema, Text};

use crate::response::ResponseShape;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Critical,
    Success,
}

impl NotificationKind {
    pub const VALUES: &'static [&'static str] = &["info", "warning", "critical", "success"];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    pub created_at: String,
}

impl ResponseShape for Notification {
    fn shape() -> FieldType {
        Schema::new()
            .field("id", Text::new())
            .field("userId", Text::new())
            .field("type", FieldType::one_of(NotificationKind::VALUES))
            .field("title", Text::new())
            .field("message", Text::new())
            .field("read", FieldType::Boolean)
            .optional("actionUrl", Text::new())
            .field("createdAt", Text::new())
            .into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrisisContact {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "available24x7")]
    pub available_24x7: bool,
    pub specialties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ResponseShape for CrisisContact {
    fn shape() -> FieldType {
        Schema::new()
            .field("id", Text::new())
            .field("name", Text::new())
            .field("organization", Text::new())
            .field("phone", Text::new())
            .optional("email", Text::new())
            .optional("website", Text::new())
            .field("available24x7", FieldType::Boolean)
            .field("specialties", FieldType::array(Text::new()))
            .optional("location", Text::new())
            .into()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Communication,
    MentalHealth,
    CrisisManagement,
    General,
}

impl ResourceCategory {
    pub const VALUES: &'static [&'static str] =
        &["communication", "mental_health", "crisis_management", "general"];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Guide,
    Checklist,
}

impl ResourceType {
    pub const VALUES: &'static [&'static str] = &["article", "video", "guide", "checklist"];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const VALUES: &'static [&'static str] = &["beginner", "intermediate", "advanced"];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoachingResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
}

impl ResponseShape for CoachingResource {
    fn shape() -> FieldType {
        Schema::new()
            .field("id", Text::new())
            .field("title", Text::new())
            .field("description", Text::new())
            .field("category", FieldType::one_of(ResourceCategory::VALUES))
            .field("type", FieldType::one_of(ResourceType::VALUES))
            .optional("url", Text::new())
            .optional("content", Text::new())
            .field("tags", FieldType::array(Text::new()))
            .field("difficulty", FieldType::one_of(Difficulty::VALUES))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn crisis_contact_wire_name() {
        let contact = CrisisContact {
            id: "c1".into(),
            name: "Helpline".into(),
            organization: "Org".into(),
            phone: "988".into(),
            email: None,
            website: None,
            available_24x7: true,
            specialties: vec![],
            location: None,
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["available24x7"], json!(true));
        assert!(json.get("email").is_none());
    }
}
