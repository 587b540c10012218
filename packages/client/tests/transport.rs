//! Transport behavior against small in-process axum stubs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use mitra_client::{ApiClient, ApiError, ClientConfig, SubmitError};

async fn serve(router: Router) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(&ClientConfig::new(format!("http://{addr}"))).unwrap()
}

#[tokio::test]
async fn error_status_becomes_http_error() {
    let client = serve(Router::new().route(
        "/api/ping",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    let err = client.ping().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            message: "HTTP 500: Internal Server Error".into()
        }
    );
}

#[tokio::test]
async fn not_found_becomes_http_error() {
    let client = serve(Router::new()).await;
    let err = client.latest_risk("s-1").await.unwrap_err();
    assert_eq!(err.status(), 404);
    assert!(!err.is_transport());
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&ClientConfig::new(format!("http://{addr}"))).unwrap();
    let err = client.ping().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), 0);
    assert!(err.message().starts_with("Network error: "));
}

#[tokio::test]
async fn identical_calls_are_independent_round_trips() {
    let hits = Arc::new(AtomicUsize::new(0));
    let client = serve(
        Router::new()
            .route(
                "/api/ping",
                get(|State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({"message": "ping"}))
                }),
            )
            .with_state(Arc::clone(&hits)),
    )
    .await;

    client.ping().await.unwrap();
    client.ping().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn body_of_wrong_shape_is_a_transport_error() {
    let client = serve(Router::new().route(
        "/api/students/{student_id}/moods",
        get(|| async { Json(json!({"success": true, "data": [{"id": "m-1", "mood": "great"}]})) }),
    ))
    .await;

    let err = client.list_moods("s-1").await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.message().contains("failed validation"), "{}", err.message());
}

#[tokio::test]
async fn non_json_body_is_a_transport_error() {
    let client = serve(Router::new().route("/api/demo", get(|| async { "<html>oops</html>" }))).await;

    let err = client.demo().await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.message().contains("not JSON"));
}

#[tokio::test]
async fn json_content_type_and_query_are_sent() {
    let client = serve(Router::new().route(
        "/api/analytics/trends/{student_id}",
        get(
            |headers: HeaderMap, Query(q): Query<std::collections::HashMap<String, String>>| async move {
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                if content_type != "application/json" || q.get("type").map(String::as_str) != Some("risk") {
                    return (StatusCode::BAD_REQUEST, Json(json!({})));
                }
                (StatusCode::OK, Json(json!({"success": true, "data": {}})))
            },
        ),
    ))
    .await;

    let trends = client
        .analytics_trends("s-1", mitra_api::TrendKind::Risk)
        .await
        .unwrap();
    let data = trends.data.unwrap();
    assert!(data.mood_trends.is_empty());
    assert!(data.risk_trends.is_empty());
}

#[tokio::test]
async fn test_endpoint_echoes_posted_body() {
    let client = serve(Router::new().route(
        "/api/test",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "success": true,
                "method": "POST",
                "timestamp": "2026-01-01T00:00:00Z",
                "endpoint": "/api/test",
                "body": body,
                "message": "POST request processed successfully",
            }))
        }),
    ))
    .await;

    let echoed = client.test(&json!({"hello": "world"})).await.unwrap();
    assert_eq!(echoed.method, "POST");
    assert_eq!(echoed.body, Some(json!({"hello": "world"})));
}

#[tokio::test]
async fn invalid_submission_never_reaches_the_server() {
    let hits = Arc::new(AtomicUsize::new(0));
    let client = serve(
        Router::new()
            .route(
                "/api/students/{student_id}/moods",
                post(|State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    StatusCode::CREATED
                }),
            )
            .with_state(Arc::clone(&hits)),
    )
    .await;

    let err = client
        .submit_mood("s-1", &json!({"mood": 6, "notes": "x"}))
        .await
        .unwrap_err();
    let SubmitError::Invalid(errors) = err else {
        panic!("expected validation failure, got {err:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Mood must be between 1 and 5");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_submission_is_sent_with_defaults_applied() {
    let client = serve(Router::new().route(
        "/api/students/{student_id}/moods",
        post(|Json(body): Json<Value>| async move {
            (
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "data": {
                        "id": "m-1",
                        "studentId": "s-1",
                        "mood": body["mood"],
                        "factors": body["factors"],
                        "timestamp": "2026-01-01T00:00:00Z",
                    }
                })),
            )
        }),
    ))
    .await;

    let created = client.submit_mood("s-1", &json!({"mood": "4"})).await.unwrap();
    let entry = created.data.unwrap();
    assert_eq!(entry.mood, 4);
    assert!(entry.factors.is_empty());
}
