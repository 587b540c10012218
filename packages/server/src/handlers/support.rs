//! Analytics, notification, crisis and coaching handlers.
//!
//! The analytics endpoints return empty series: there is no data to
//! aggregate.

use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use mitra::CrisisAlertForm;
use mitra_api::{
    Ack, Alert, AlertKind, AnalyticsData, ApiResponse, CoachingResource, CrisisContact,
    EngagementMetrics, Notification, Period, Trends,
};

use crate::error::AppError;

use super::{new_id, now, FormBody};

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    #[serde(default = "default_period")]
    pub period: Period,
}

fn default_period() -> Period {
    Period::Week
}

/// `GET /api/analytics/dashboard/{student_id}?period=`
pub async fn dashboard(
    Path(_student_id): Path<String>,
    query: Result<Query<DashboardParams>, QueryRejection>,
) -> Result<Json<ApiResponse<AnalyticsData>>, AppError> {
    let Query(params) = query?;
    Ok(Json(ApiResponse::ok(AnalyticsData {
        period: params.period,
        mood_trends: Vec::new(),
        risk_trends: Vec::new(),
        engagement_metrics: EngagementMetrics::default(),
        alerts: Vec::new(),
    })))
}

/// `GET /api/analytics/trends/{student_id}?type=`
pub async fn trends(Path(_student_id): Path<String>) -> Json<ApiResponse<Trends>> {
    Json(ApiResponse::ok(Trends::default()))
}

/// `GET /api/analytics/reports/{student_id}`
pub async fn reports(Path(_student_id): Path<String>) -> Json<ApiResponse<Vec<AnalyticsData>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `GET /api/notifications`
pub async fn list_notifications() -> Json<ApiResponse<Vec<Notification>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `PATCH /api/notifications/{id}/read`
pub async fn mark_read(Path(id): Path<String>) -> Json<ApiResponse<Ack>> {
    Json(ApiResponse::done(format!("notification {id} marked as read")))
}

/// `PATCH /api/notifications/read-all`
pub async fn mark_all_read() -> Json<ApiResponse<Ack>> {
    Json(ApiResponse::done("all notifications marked as read"))
}

/// `GET /api/crisis/contacts`
pub async fn crisis_contacts() -> Json<ApiResponse<Vec<CrisisContact>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `POST /api/crisis/alert`
///
/// Body: [`CrisisAlertForm`]. Returns 201 with the raised [`Alert`].
pub async fn crisis_alert(FormBody(form): FormBody<CrisisAlertForm>) -> impl IntoResponse {
    if form.immediate_action {
        tracing::warn!(student_id = %form.student_id, severity = ?form.severity, "crisis alert requires immediate action");
    } else {
        tracing::info!(student_id = %form.student_id, severity = ?form.severity, "crisis alert raised");
    }
    let alert = Alert {
        id: new_id(),
        kind: AlertKind::CrisisIndicator,
        severity: form.severity,
        message: form.description,
        student_id: form.student_id,
        triggered_at: now(),
        acknowledged: false,
    };
    (StatusCode::CREATED, Json(ApiResponse::ok(alert)))
}

/// `GET /api/coaching/resources`
pub async fn coaching_resources() -> Json<ApiResponse<Vec<CoachingResource>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `GET /api/coaching/resources/{id}`
pub async fn coaching_resource(Path(id): Path<String>) -> AppError {
    AppError::NotFound(format!("coaching resource {id} not found"))
}
