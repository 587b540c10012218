//! Request and response types for the Mitra HTTP API.
//!
//! This crate encodes the API contract as Rust types: one request type and
//! one response type per endpoint, the [`Endpoint`] catalog that maps each
//! logical operation to its method and path template, and the
//! [`ResponseShape`] declarations the client checks response bodies against.
//! Request bodies are the form payloads from the [`mitra`] crate.
//!
//! # Endpoints covered
//!
//! All paths are relative to [`API_BASE`] (`/api`).
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | GET | `/ping` | → [`PingResponse`] |
//! | GET | `/demo` | → [`DemoResponse`] |
//! | POST | `/test` | any JSON → [`TestResponse`] |
//! | GET | `/users` | → `ApiResponse<Vec<User>>` |
//! | GET / PUT / DELETE | `/users/{id}` | [`mitra::UserForm`] → `ApiResponse<User>` / `ApiResponse<Ack>` |
//! | GET / POST | `/students` | [`mitra::StudentForm`] → `ApiResponse<Student>` |
//! | GET / PUT / DELETE | `/students/{id}` | [`mitra::StudentForm`] → `ApiResponse<Student>` |
//! | GET / POST | `/students/{student_id}/moods` | [`mitra::MoodEntryForm`] → `ApiResponse<MoodEntry>` |
//! | GET | `/students/{student_id}/moods/{mood_id}` | → `ApiResponse<MoodEntry>` |
//! | GET / POST | `/students/{student_id}/risks` | [`mitra::RiskAssessmentForm`] → `ApiResponse<RiskAssessment>` |
//! | GET | `/students/{student_id}/risks/latest` | → `ApiResponse<RiskAssessment>` |
//! | GET / POST | `/students/{student_id}/chat/sessions` | → `ApiResponse<ChatSession>` |
//! | GET / POST | `/chat/sessions/{session_id}/messages` | [`mitra::ChatMessageForm`] → `ApiResponse<ChatMessage>` |
//! | GET | `/analytics/dashboard/{student_id}?period=` | → `ApiResponse<AnalyticsData>` |
//! | GET | `/analytics/trends/{student_id}?type=` | → `ApiResponse<Trends>` |
//! | GET | `/analytics/reports/{student_id}` | → `ApiResponse<Vec<AnalyticsData>>` |
//! | GET | `/notifications` | → `ApiResponse<Vec<Notification>>` |
//! | PATCH | `/notifications/{id}/read`, `/notifications/read-all` | → `ApiResponse<Ack>` |
//! | GET | `/crisis/contacts` | → `ApiResponse<Vec<CrisisContact>>` |
//! | POST | `/crisis/alert` | [`mitra::CrisisAlertForm`] → `ApiResponse<Alert>` |
//! | GET | `/coaching/resources`, `/coaching/resources/{id}` | → `ApiResponse<CoachingResource>` |

pub mod analytics;
pub mod chat;
pub mod endpoint;
pub mod error;
pub mod mood;
pub mod people;
pub mod response;
pub mod risk;
pub mod support;
pub mod system;

pub use analytics::{
    Alert, AlertKind, AnalyticsData, EngagementMetrics, MoodTrend, Period, RiskTrend, TrendKind,
    Trends,
};
pub use chat::{ChatMessage, ChatSession, MessageMetadata, Sender};
pub use endpoint::{Endpoint, Method, PathError, API_BASE};
pub use error::ErrorResponse;
pub use mood::MoodEntry;
pub use people::{Student, User};
pub use response::{Ack, ApiResponse, ResponseShape};
pub use risk::RiskAssessment;
pub use support::{
    CoachingResource, CrisisContact, Difficulty, Notification, NotificationKind, ResourceCategory,
    ResourceType,
};
pub use system::{DemoResponse, PingResponse, TestResponse};
