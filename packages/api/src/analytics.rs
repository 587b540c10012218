//! Analytics payloads. These are typed placeholders; the server stub does
//! not aggregate anything.

use serde::{Deserialize, Serialize};
use serde_json::json;

use mitra::schema::{FieldType, Number, Schema, Text};
use mitra::Severity;

use crate::response::ResponseShape;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    pub const VALUES: &'static [&'static str] = &["day", "week", "month", "year"];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

/// Which series `GET /analytics/trends/{student_id}?type=` returns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendKind {
    Mood,
    Risk,
}

impl TrendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendKind::Mood => "mood",
            TrendKind::Risk => "risk",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodTrend {
    pub date: String,
    pub average_mood: f64,
    pub entry_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskTrend {
    pub date: String,
    pub risk_score: f64,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    pub chat_sessions: u32,
    pub mood_entries: u32,
    pub average_session_duration: f64,
    pub response_time: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    MoodDecline,
    RiskIncrease,
    EngagementDrop,
    CrisisIndicator,
}

impl AlertKind {
    pub const VALUES: &'static [&'static str] =
        &["mood_decline", "risk_increase", "engagement_drop", "crisis_indicator"];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    pub student_id: String,
    pub triggered_at: String,
    pub acknowledged: bool,
}

impl ResponseShape for Alert {
    fn shape() -> FieldType {
        alert_schema().into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub period: Period,
    pub mood_trends: Vec<MoodTrend>,
    pub risk_trends: Vec<RiskTrend>,
    pub engagement_metrics: EngagementMetrics,
    pub alerts: Vec<Alert>,
}

impl ResponseShape for AnalyticsData {
    fn shape() -> FieldType {
        Schema::new()
            .field("period", FieldType::one_of(Period::VALUES))
            .field("moodTrends", FieldType::array(mood_trend_schema()))
            .field("riskTrends", FieldType::array(risk_trend_schema()))
            .field(
                "engagementMetrics",
                Schema::new()
                    .field("chatSessions", count())
                    .field("moodEntries", count())
                    .field("averageSessionDuration", Number::new().min(0.0))
                    .field("responseTime", Number::new().min(0.0)),
            )
            .field("alerts", FieldType::array(alert_schema()))
            .into()
    }
}

/// Response data for the trends endpoint; only the requested series is
/// populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    #[serde(default)]
    pub mood_trends: Vec<MoodTrend>,
    #[serde(default)]
    pub risk_trends: Vec<RiskTrend>,
}

impl ResponseShape for Trends {
    fn shape() -> FieldType {
        Schema::new()
            .with_default("moodTrends", FieldType::array(mood_trend_schema()), json!([]))
            .with_default("riskTrends", FieldType::array(risk_trend_schema()), json!([]))
            .into()
    }
}

// --- schemas -----------------------------------------------------------------

fn count() -> Number {
    Number::new().min(0.0).integer()
}

fn mood_trend_schema() -> Schema {
    Schema::new()
        .field("date", Text::new())
        .field("averageMood", Number::new().min(1.0).max(5.0))
        .field("entryCount", count())
}

fn risk_trend_schema() -> Schema {
    Schema::new()
        .field("date", Text::new())
        .field("riskScore", Number::new().min(0.0).max(10.0))
        .field("level", Text::new())
}

fn alert_schema() -> Schema {
    Schema::new()
        .field("id", Text::new())
        .field("type", FieldType::one_of(AlertKind::VALUES))
        .field("severity", FieldType::one_of(Severity::VALUES))
        .field("message", Text::new())
        .field("studentId", Text::new())
        .field("triggeredAt", Text::new())
        .field("acknowledged", FieldType::Boolean)
}
