//! One strongly typed method per catalog endpoint.
//!
//! Each method builds its [`RequestDescriptor`] from the [`Endpoint`] catalog
//! and names its request and response types, so call sites never deal in raw
//! URLs or untyped JSON.

use serde::Serialize;

use mitra::{
    ChatMessageForm, CrisisAlertForm, MoodEntryForm, RiskAssessmentForm, StudentForm, UserForm,
};
use mitra_api::{
    Ack, Alert, AnalyticsData, ApiResponse, ChatMessage, ChatSession, CoachingResource,
    CrisisContact, DemoResponse, Endpoint, MoodEntry, Notification, Period, PingResponse,
    RiskAssessment, Student, TestResponse, TrendKind, Trends, User,
};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::RequestDescriptor;

/// Result of an endpoint that answers with the standard envelope.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

impl ApiClient {
    // --- system --------------------------------------------------------------

    pub async fn ping(&self) -> Result<PingResponse, ApiError> {
        self.call(RequestDescriptor::new(Endpoint::Ping, &[])?).await
    }

    pub async fn demo(&self) -> Result<DemoResponse, ApiError> {
        self.call(RequestDescriptor::new(Endpoint::Demo, &[])?).await
    }

    /// Post `data` to the echo endpoint.
    pub async fn test<B: Serialize + ?Sized>(&self, data: &B) -> Result<TestResponse, ApiError> {
        self.call(RequestDescriptor::new(Endpoint::Test, &[])?.body(data)?)
            .await
    }

    // --- users ---------------------------------------------------------------

    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.call(RequestDescriptor::new(Endpoint::ListUsers, &[])?).await
    }

    pub async fn get_user(&self, id: &str) -> ApiResult<User> {
        self.call(RequestDescriptor::new(Endpoint::GetUser, &[id])?).await
    }

    pub async fn create_user(&self, form: &UserForm) -> ApiResult<User> {
        self.call(RequestDescriptor::new(Endpoint::CreateUser, &[])?.body(form)?)
            .await
    }

    pub async fn update_user(&self, id: &str, form: &UserForm) -> ApiResult<User> {
        self.call(RequestDescriptor::new(Endpoint::UpdateUser, &[id])?.body(form)?)
            .await
    }

    pub async fn delete_user(&self, id: &str) -> ApiResult<Ack> {
        self.call(RequestDescriptor::new(Endpoint::DeleteUser, &[id])?).await
    }

    // --- students ------------------------------------------------------------

    pub async fn list_students(&self) -> ApiResult<Vec<Student>> {
        self.call(RequestDescriptor::new(Endpoint::ListStudents, &[])?).await
    }

    pub async fn get_student(&self, id: &str) -> ApiResult<Student> {
        self.call(RequestDescriptor::new(Endpoint::GetStudent, &[id])?).await
    }

    pub async fn create_student(&self, form: &StudentForm) -> ApiResult<Student> {
        self.call(RequestDescriptor::new(Endpoint::CreateStudent, &[])?.body(form)?)
            .await
    }

    pub async fn update_student(&self, id: &str, form: &StudentForm) -> ApiResult<Student> {
        self.call(RequestDescriptor::new(Endpoint::UpdateStudent, &[id])?.body(form)?)
            .await
    }

    pub async fn delete_student(&self, id: &str) -> ApiResult<Ack> {
        self.call(RequestDescriptor::new(Endpoint::DeleteStudent, &[id])?).await
    }

    // --- moods ---------------------------------------------------------------

    pub async fn list_moods(&self, student_id: &str) -> ApiResult<Vec<MoodEntry>> {
        self.call(RequestDescriptor::new(Endpoint::ListMoods, &[student_id])?)
            .await
    }

    pub async fn create_mood(&self, student_id: &str, form: &MoodEntryForm) -> ApiResult<MoodEntry> {
        self.call(RequestDescriptor::new(Endpoint::CreateMood, &[student_id])?.body(form)?)
            .await
    }

    pub async fn get_mood(&self, student_id: &str, mood_id: &str) -> ApiResult<MoodEntry> {
        self.call(RequestDescriptor::new(Endpoint::GetMood, &[student_id, mood_id])?)
            .await
    }

    // --- risk assessments ----------------------------------------------------

    pub async fn list_risks(&self, student_id: &str) -> ApiResult<Vec<RiskAssessment>> {
        self.call(RequestDescriptor::new(Endpoint::ListRisks, &[student_id])?)
            .await
    }

    pub async fn latest_risk(&self, student_id: &str) -> ApiResult<RiskAssessment> {
        self.call(RequestDescriptor::new(Endpoint::LatestRisk, &[student_id])?)
            .await
    }

    pub async fn create_risk(
        &self,
        student_id: &str,
        form: &RiskAssessmentForm,
    ) -> ApiResult<RiskAssessment> {
        self.call(RequestDescriptor::new(Endpoint::CreateRisk, &[student_id])?.body(form)?)
            .await
    }

    // --- chat ----------------------------------------------------------------

    pub async fn list_chat_sessions(&self, student_id: &str) -> ApiResult<Vec<ChatSession>> {
        self.call(RequestDescriptor::new(Endpoint::ListChatSessions, &[student_id])?)
            .await
    }

    pub async fn create_chat_session(&self, student_id: &str) -> ApiResult<ChatSession> {
        self.call(RequestDescriptor::new(Endpoint::CreateChatSession, &[student_id])?)
            .await
    }

    pub async fn list_chat_messages(&self, session_id: &str) -> ApiResult<Vec<ChatMessage>> {
        self.call(RequestDescriptor::new(Endpoint::ListChatMessages, &[session_id])?)
            .await
    }

    pub async fn send_chat_message(
        &self,
        session_id: &str,
        form: &ChatMessageForm,
    ) -> ApiResult<ChatMessage> {
        self.call(RequestDescriptor::new(Endpoint::SendChatMessage, &[session_id])?.body(form)?)
            .await
    }

    // --- analytics -----------------------------------------------------------

    pub async fn analytics_dashboard(
        &self,
        student_id: &str,
        period: Period,
    ) -> ApiResult<AnalyticsData> {
        self.call(
            RequestDescriptor::new(Endpoint::AnalyticsDashboard, &[student_id])?
                .query("period", period.as_str()),
        )
        .await
    }

    pub async fn analytics_trends(&self, student_id: &str, kind: TrendKind) -> ApiResult<Trends> {
        self.call(
            RequestDescriptor::new(Endpoint::AnalyticsTrends, &[student_id])?
                .query("type", kind.as_str()),
        )
        .await
    }

    pub async fn analytics_reports(&self, student_id: &str) -> ApiResult<Vec<AnalyticsData>> {
        self.call(RequestDescriptor::new(Endpoint::AnalyticsReports, &[student_id])?)
            .await
    }

    // --- notifications -------------------------------------------------------

    pub async fn list_notifications(&self) -> ApiResult<Vec<Notification>> {
        self.call(RequestDescriptor::new(Endpoint::ListNotifications, &[])?)
            .await
    }

    pub async fn mark_notification_read(&self, id: &str) -> ApiResult<Ack> {
        self.call(RequestDescriptor::new(Endpoint::MarkNotificationRead, &[id])?)
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> ApiResult<Ack> {
        self.call(RequestDescriptor::new(Endpoint::MarkAllNotificationsRead, &[])?)
            .await
    }

    // --- crisis support ------------------------------------------------------

    pub async fn crisis_contacts(&self) -> ApiResult<Vec<CrisisContact>> {
        self.call(RequestDescriptor::new(Endpoint::CrisisContacts, &[])?)
            .await
    }

    pub async fn crisis_alert(&self, form: &CrisisAlertForm) -> ApiResult<Alert> {
        self.call(RequestDescriptor::new(Endpoint::CrisisAlert, &[])?.body(form)?)
            .await
    }

    // --- coaching ------------------------------------------------------------

    pub async fn coaching_resources(&self) -> ApiResult<Vec<CoachingResource>> {
        self.call(RequestDescriptor::new(Endpoint::CoachingResources, &[])?)
            .await
    }

    pub async fn coaching_resource(&self, id: &str) -> ApiResult<CoachingResource> {
        self.call(RequestDescriptor::new(Endpoint::CoachingResource, &[id])?)
            .await
    }
}
