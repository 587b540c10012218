//! Declared form schemas and the typed payloads they validate into.
//!
//! Each form pairs a static [`Schema`] with a serde type via the [`Form`]
//! trait. Field names on the wire are camelCase.

use std::sync::LazyLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::schema::{FieldType, Number, Schema, Text};
use crate::validation::{validate_as, Validation};

/// A typed payload backed by a declared schema.
pub trait Form: Serialize + DeserializeOwned {
    /// The schema raw input must satisfy.
    fn schema() -> &'static Schema;
}

/// Validate raw form input and decode it as `F`.
pub fn parse<F: Form>(raw: &Value) -> Validation<F> {
    validate_as(F::schema(), raw)
}

// ---------------------------------------------------------------------------
// Shared enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Parent,
    Student,
    Counselor,
}

impl Role {
    pub const VALUES: &'static [&'static str] = &["parent", "student", "counselor"];
}

/// Placeholder risk band attached to assessments. Nothing derives it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const VALUES: &'static [&'static str] = &["low", "moderate", "high", "critical"];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const VALUES: &'static [&'static str] = &["low", "medium", "high", "critical"];
}

/// Parses a [`Severity`] from its lowercase wire-format string.
impl std::str::FromStr for Severity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!(
                "unknown severity {:?}; expected one of: low, medium, high, critical",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const VALUES: &'static [&'static str] = &["light", "dark", "system"];
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

static LOGIN: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("email", Text::new().email("Invalid email address"))
        .field(
            "password",
            Text::new().min_len(6, "Password must be at least 6 characters"),
        )
});

impl Form for LoginForm {
    fn schema() -> &'static Schema {
        &LOGIN
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
}

static USER: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("name", Text::new().min_len(2, "Name must be at least 2 characters"))
        .field("email", Text::new().email("Invalid email address"))
        .field("role", FieldType::one_of(Role::VALUES))
});

impl Form for UserForm {
    fn schema() -> &'static Schema {
        &USER
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub name: String,
    pub age: u8,
    pub grade: String,
    pub parent_id: String,
}

static STUDENT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("name", Text::new().min_len(2, "Name must be at least 2 characters"))
        .field(
            "age",
            Number::new().min(5.0).max_msg(18.0, "Age must be between 5 and 18").integer(),
        )
        .field("grade", Text::new().min_len(1, "Grade is required"))
        .field("parentId", Text::new().min_len(1, "Parent ID is required"))
});

impl Form for StudentForm {
    fn schema() -> &'static Schema {
        &STUDENT
    }
}

/// A self-reported mood on the 1 (very sad) to 5 (very happy) scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntryForm {
    pub mood: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub factors: Vec<String>,
}

static MOOD_ENTRY: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(
            "mood",
            Number::new().min(1.0).max_msg(5.0, "Mood must be between 1 and 5").integer(),
        )
        .optional("notes", Text::new())
        .with_default("factors", FieldType::array(Text::new()), json!([]))
});

impl Form for MoodEntryForm {
    fn schema() -> &'static Schema {
        &MOOD_ENTRY
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageForm {
    pub content: String,
    pub session_id: String,
}

static CHAT_MESSAGE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(
            "content",
            Text::new()
                .min_len(1, "Message cannot be empty")
                .max_len(1000, "Message too long"),
        )
        .field("sessionId", Text::new().min_len(1, "Session ID is required"))
});

impl Form for ChatMessageForm {
    fn schema() -> &'static Schema {
        &CHAT_MESSAGE
    }
}

/// One contributing factor of a risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFactor {
    pub category: String,
    pub severity: f64,
    pub description: String,
    pub evidence: Vec<String>,
}

/// Schema for a single [`RiskFactor`]; shared with response checking.
pub static RISK_FACTOR: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("category", Text::new())
        .field("severity", Number::new().min(0.0).max(10.0))
        .field("description", Text::new())
        .field("evidence", FieldType::array(Text::new()))
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentForm {
    pub student_id: String,
    pub score: f64,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
}

static RISK_ASSESSMENT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("studentId", Text::new().min_len(1, "Student ID is required"))
        .field(
            "score",
            Number::new().min(0.0).max_msg(10.0, "Risk score must be between 0 and 10"),
        )
        .field("level", FieldType::one_of(RiskLevel::VALUES))
        .field("factors", FieldType::array(RISK_FACTOR.clone()))
        .field("recommendations", FieldType::array(Text::new()))
});

impl Form for RiskAssessmentForm {
    fn schema() -> &'static Schema {
        &RISK_ASSESSMENT
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrisisAlertForm {
    pub student_id: String,
    pub severity: Severity,
    pub description: String,
    pub immediate_action: bool,
}

static CRISIS_ALERT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("studentId", Text::new().min_len(1, "Student ID is required"))
        .field("severity", FieldType::one_of(Severity::VALUES))
        .field(
            "description",
            Text::new().min_len(10, "Description must be at least 10 characters"),
        )
        .with_default("immediateAction", FieldType::Boolean, json!(false))
});

impl Form for CrisisAlertForm {
    fn schema() -> &'static Schema {
        &CRISIS_ALERT
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub share_data: bool,
    pub analytics: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsForm {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub preferences: Preferences,
}

static SETTINGS: LazyLock<Schema> = LazyLock::new(|| {
    let notifications = Schema::new()
        .with_default("email", FieldType::Boolean, json!(true))
        .with_default("push", FieldType::Boolean, json!(true))
        .with_default("sms", FieldType::Boolean, json!(false));
    let privacy = Schema::new()
        .with_default("shareData", FieldType::Boolean, json!(false))
        .with_default("analytics", FieldType::Boolean, json!(true));
    let preferences = Schema::new()
        .with_default("theme", FieldType::one_of(Theme::VALUES), json!("system"))
        .with_default("language", Text::new(), json!("en"));

    Schema::new()
        .with_default("notifications", notifications, json!({}))
        .with_default("privacy", privacy, json!({}))
        .with_default("preferences", preferences, json!({}))
});

impl Form for SettingsForm {
    fn schema() -> &'static Schema {
        &SETTINGS
    }
}

// ---------------------------------------------------------------------------
// FormKind
// ---------------------------------------------------------------------------

/// Every declared form, selectable by its kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    User,
    Student,
    MoodEntry,
    ChatMessage,
    RiskAssessment,
    CrisisAlert,
    Settings,
}

impl FormKind {
    pub const ALL: [FormKind; 8] = [
        FormKind::Login,
        FormKind::User,
        FormKind::Student,
        FormKind::MoodEntry,
        FormKind::ChatMessage,
        FormKind::RiskAssessment,
        FormKind::CrisisAlert,
        FormKind::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::User => "user",
            FormKind::Student => "student",
            FormKind::MoodEntry => "mood-entry",
            FormKind::ChatMessage => "chat-message",
            FormKind::RiskAssessment => "risk-assessment",
            FormKind::CrisisAlert => "crisis-alert",
            FormKind::Settings => "settings",
        }
    }

    pub fn schema(self) -> &'static Schema {
        match self {
            FormKind::Login => LoginForm::schema(),
            FormKind::User => UserForm::schema(),
            FormKind::Student => StudentForm::schema(),
            FormKind::MoodEntry => MoodEntryForm::schema(),
            FormKind::ChatMessage => ChatMessageForm::schema(),
            FormKind::RiskAssessment => RiskAssessmentForm::schema(),
            FormKind::CrisisAlert => CrisisAlertForm::schema(),
            FormKind::Settings => SettingsForm::schema(),
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a form name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form {0:?}; expected one of: {names}", names = FormKind::ALL.map(FormKind::name).join(", "))]
pub struct UnknownForm(pub String);

impl std::str::FromStr for FormKind {
    type Err = UnknownForm;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownForm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn mood_entry_defaults_factors() {
        let out = parse::<MoodEntryForm>(&json!({"mood": 3, "notes": "ok"}));
        assert_eq!(
            out,
            Validation::Valid(MoodEntryForm {
                mood: 3,
                notes: Some("ok".into()),
                factors: vec![],
            })
        );
    }

    #[test]
    fn mood_entry_serialises_with_empty_factors() {
        let form = parse::<MoodEntryForm>(&json!({"mood": "3", "notes": "ok"}))
            .into_result()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"mood": 3, "notes": "ok", "factors": []})
        );
    }

    #[test]
    fn mood_above_scale_rejected() {
        let out = parse::<MoodEntryForm>(&json!({"mood": 6}));
        assert_eq!(
            out.errors(),
            &[FieldError::new("mood", "Mood must be between 1 and 5")]
        );
    }

    #[test]
    fn lower_bounds_use_generated_messages() {
        let out = parse::<MoodEntryForm>(&json!({"mood": 0}));
        assert_eq!(
            out.errors(),
            &[FieldError::new("mood", "Number must be greater than or equal to 1")]
        );

        let out = parse::<StudentForm>(&json!({
            "name": "Asha", "age": 4, "grade": "1", "parentId": "p-1"
        }));
        assert_eq!(
            out.errors(),
            &[FieldError::new("age", "Number must be greater than or equal to 5")]
        );

        let out = parse::<RiskAssessmentForm>(&json!({
            "studentId": "s1", "score": -1, "level": "low", "factors": [], "recommendations": []
        }));
        assert_eq!(
            out.errors(),
            &[FieldError::new("score", "Number must be greater than or equal to 0")]
        );
    }

    #[test]
    fn upper_bounds_use_declared_messages() {
        let out = parse::<StudentForm>(&json!({
            "name": "Asha", "age": 19, "grade": "1", "parentId": "p-1"
        }));
        assert_eq!(out.errors(), &[FieldError::new("age", "Age must be between 5 and 18")]);

        let out = parse::<RiskAssessmentForm>(&json!({
            "studentId": "s1", "score": 10.5, "level": "low", "factors": [], "recommendations": []
        }));
        assert_eq!(
            out.errors(),
            &[FieldError::new("score", "Risk score must be between 0 and 10")]
        );
    }

    #[test]
    fn student_reports_every_field() {
        let out = parse::<StudentForm>(&json!({"name": "A", "age": 30, "grade": ""}));
        let paths: Vec<_> = out.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["name", "age", "grade", "parentId"]);
    }

    #[test]
    fn chat_message_bounds() {
        let long = "x".repeat(1001);
        let out = parse::<ChatMessageForm>(&json!({"content": long, "sessionId": "s1"}));
        assert_eq!(out.errors(), &[FieldError::new("content", "Message too long")]);
        let out = parse::<ChatMessageForm>(&json!({"content": "", "sessionId": "s1"}));
        assert_eq!(out.errors(), &[FieldError::new("content", "Message cannot be empty")]);
    }

    #[test]
    fn risk_assessment_nested_factor_paths() {
        let out = parse::<RiskAssessmentForm>(&json!({
            "studentId": "s1",
            "score": 4,
            "level": "moderate",
            "factors": [{"category": "sleep", "severity": 11, "description": "", "evidence": [1]}],
            "recommendations": []
        }));
        let paths: Vec<_> = out.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["factors.0.severity", "factors.0.evidence.0"]);
    }

    #[test]
    fn crisis_alert_defaults_immediate_action() {
        let form = parse::<CrisisAlertForm>(&json!({
            "studentId": "s1",
            "severity": "high",
            "description": "Student reported feeling unsafe."
        }))
        .into_result()
        .unwrap();
        assert!(!form.immediate_action);
        assert_eq!(form.severity, Severity::High);
    }

    #[test]
    fn settings_fill_nested_defaults() {
        let form = parse::<SettingsForm>(&json!({"preferences": {"theme": "dark"}}))
            .into_result()
            .unwrap();
        assert_eq!(form.preferences.theme, Theme::Dark);
        assert_eq!(form.preferences.language, "en");
        assert!(form.notifications.email && form.notifications.push && !form.notifications.sms);
        assert!(!form.privacy.share_data && form.privacy.analytics);
    }

    #[test]
    fn login_rejects_bad_email_and_short_password() {
        let out = parse::<LoginForm>(&json!({"email": "someone", "password": "123"}));
        assert_eq!(
            out.errors(),
            &[
                FieldError::new("email", "Invalid email address"),
                FieldError::new("password", "Password must be at least 6 characters"),
            ]
        );
    }

    #[test]
    fn severity_parses_wire_names() {
        for (name, severity) in Severity::VALUES.iter().zip([
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]) {
            assert_eq!(name.parse::<Severity>(), Ok(severity));
        }
        let err = "dire".parse::<Severity>().unwrap_err();
        assert!(err.contains("unknown severity"), "{err}");
    }

    #[test]
    fn form_kind_parses_names() {
        for kind in FormKind::ALL {
            assert_eq!(kind.name().parse::<FormKind>(), Ok(kind));
        }
        let err = "mood".parse::<FormKind>().unwrap_err();
        assert!(err.to_string().contains("mood-entry"));
    }
}
