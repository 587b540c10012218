//! Chat handlers: sessions per student and messages per session.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use mitra::ChatMessageForm;
use mitra_api::{ApiResponse, ChatMessage, ChatSession, Sender};

use super::{new_id, now, FormBody};

/// `GET /api/students/{student_id}/chat/sessions`
pub async fn list_sessions(Path(_student_id): Path<String>) -> Json<ApiResponse<Vec<ChatSession>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `POST /api/students/{student_id}/chat/sessions`
///
/// Opens an empty session.
pub async fn create_session(Path(student_id): Path<String>) -> impl IntoResponse {
    let session = ChatSession {
        id: new_id(),
        student_id,
        started_at: now(),
        ended_at: None,
        messages: Vec::new(),
        summary: None,
        risk_level: None,
    };
    (StatusCode::CREATED, Json(ApiResponse::ok(session)))
}

/// `GET /api/chat/sessions/{session_id}/messages`
pub async fn list_messages(Path(_session_id): Path<String>) -> Json<ApiResponse<Vec<ChatMessage>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `POST /api/chat/sessions/{session_id}/messages`
pub async fn send_message(
    Path(session_id): Path<String>,
    FormBody(form): FormBody<ChatMessageForm>,
) -> impl IntoResponse {
    let message = ChatMessage {
        id: new_id(),
        session_id,
        sender: Sender::Student,
        content: form.content,
        timestamp: now(),
        metadata: None,
    };
    (StatusCode::CREATED, Json(ApiResponse::ok(message)))
}
