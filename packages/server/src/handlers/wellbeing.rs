//! Mood entry and risk assessment handlers under `/api/students/{student_id}`.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use mitra::{MoodEntryForm, RiskAssessmentForm};
use mitra_api::{ApiResponse, MoodEntry, RiskAssessment};

use crate::error::AppError;

use super::{new_id, now, FormBody};

/// `GET /api/students/{student_id}/moods`
pub async fn list_moods(Path(_student_id): Path<String>) -> Json<ApiResponse<Vec<MoodEntry>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `POST /api/students/{student_id}/moods`
///
/// Body: [`MoodEntryForm`]. Returns 201 with the stored [`MoodEntry`].
pub async fn create_mood(
    Path(student_id): Path<String>,
    FormBody(form): FormBody<MoodEntryForm>,
) -> impl IntoResponse {
    tracing::info!(%student_id, mood = form.mood, "mood entry recorded");
    let entry = MoodEntry {
        id: new_id(),
        student_id,
        mood: form.mood,
        notes: form.notes,
        timestamp: now(),
        factors: form.factors,
    };
    (StatusCode::CREATED, Json(ApiResponse::ok(entry)))
}

/// `GET /api/students/{student_id}/moods/{mood_id}`
pub async fn get_mood(Path((_student_id, mood_id)): Path<(String, String)>) -> AppError {
    AppError::NotFound(format!("mood entry {mood_id} not found"))
}

/// `GET /api/students/{student_id}/risks`
pub async fn list_risks(Path(_student_id): Path<String>) -> Json<ApiResponse<Vec<RiskAssessment>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `GET /api/students/{student_id}/risks/latest`
///
/// Nothing is recorded, so there is never a latest assessment.
pub async fn latest_risk(Path(student_id): Path<String>) -> AppError {
    AppError::NotFound(format!("no risk assessment recorded for student {student_id}"))
}

/// `POST /api/students/{student_id}/risks`
///
/// The path's student id wins over any `studentId` in the body.
pub async fn create_risk(
    Path(student_id): Path<String>,
    FormBody(form): FormBody<RiskAssessmentForm>,
) -> impl IntoResponse {
    tracing::info!(%student_id, level = ?form.level, "risk assessment recorded");
    let assessment = RiskAssessment {
        id: new_id(),
        student_id,
        score: form.score,
        level: form.level,
        factors: form.factors,
        recommendations: form.recommendations,
        assessed_at: now(),
        assessed_by: "mitra-server".into(),
    };
    (StatusCode::CREATED, Json(ApiResponse::ok(assessment)))
}
