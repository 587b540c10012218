//! Assembles the Axum [`Router`] from all handler modules.

use axum::{
    routing::{any, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::ServerConfig,
    handlers::{self, chat, people, support, system, wellbeing, AppState},
};

/// Build the complete application router with shared state.
pub fn build_router(config: ServerConfig) -> Router {
    let state = AppState { config };

    Router::new()
        // System
        .route("/api/ping", get(system::ping))
        .route("/api/demo", get(system::demo).post(system::demo))
        .route("/api/test", any(system::test))
        // Users
        .route("/api/users", get(people::list_users).post(people::create_user))
        .route(
            "/api/users/{id}",
            get(people::get_user)
                .put(people::update_user)
                .delete(people::delete_user),
        )
        // Students
        .route(
            "/api/students",
            get(people::list_students).post(people::create_student),
        )
        .route(
            "/api/students/{id}",
            get(people::get_student)
                .put(people::update_student)
                .delete(people::delete_student),
        )
        // Moods and risk assessments
        .route(
            "/api/students/{student_id}/moods",
            get(wellbeing::list_moods).post(wellbeing::create_mood),
        )
        .route(
            "/api/students/{student_id}/moods/{mood_id}",
            get(wellbeing::get_mood),
        )
        .route(
            "/api/students/{student_id}/risks",
            get(wellbeing::list_risks).post(wellbeing::create_risk),
        )
        .route(
            "/api/students/{student_id}/risks/latest",
            get(wellbeing::latest_risk),
        )
        // Chat
        .route(
            "/api/students/{student_id}/chat/sessions",
            get(chat::list_sessions).post(chat::create_session),
        )
        .route(
            "/api/chat/sessions/{session_id}/messages",
            get(chat::list_messages).post(chat::send_message),
        )
        // Analytics
        .route(
            "/api/analytics/dashboard/{student_id}",
            get(support::dashboard),
        )
        .route("/api/analytics/trends/{student_id}", get(support::trends))
        .route("/api/analytics/reports/{student_id}", get(support::reports))
        // Notifications
        .route("/api/notifications", get(support::list_notifications))
        .route("/api/notifications/{id}/read", patch(support::mark_read))
        .route("/api/notifications/read-all", patch(support::mark_all_read))
        // Crisis support and coaching
        .route("/api/crisis/contacts", get(support::crisis_contacts))
        .route("/api/crisis/alert", post(support::crisis_alert))
        .route("/api/coaching/resources", get(support::coaching_resources))
        .route(
            "/api/coaching/resources/{id}",
            get(support::coaching_resource),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
