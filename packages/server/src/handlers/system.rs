//! Health-check and echo handlers: `/api/ping`, `/api/demo`, `/api/test`.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::Method,
    Json,
};
use serde_json::Value;

use mitra_api::{DemoResponse, PingResponse, TestResponse};

use crate::error::AppError;

use super::{now, AppState};

/// `GET /api/ping`
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.config.ping_message.clone(),
    })
}

/// `GET|POST /api/demo`
///
/// A POST echoes its JSON body back as `receivedData`.
pub async fn demo(method: Method, body: Bytes) -> Result<Json<DemoResponse>, AppError> {
    let received_data = if method == Method::POST {
        json_body(&body)?
    } else {
        None
    };
    Ok(Json(DemoResponse {
        message: format!("Hello from Express server - {method} request"),
        received_data,
        timestamp: now(),
    }))
}

/// `GET|POST|PUT|PATCH|DELETE /api/test`
///
/// Echoes the method, the query parameters when there are any, and the body
/// for methods that carry one.
pub async fn test(
    method: Method,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
    body: Bytes,
) -> Result<Json<TestResponse>, AppError> {
    let Query(query) = query?;
    let carries_body = matches!(method, Method::POST | Method::PUT | Method::PATCH);
    let body = if carries_body { json_body(&body)? } else { None };

    Ok(Json(TestResponse {
        success: true,
        method: method.to_string(),
        timestamp: now(),
        endpoint: "/api/test".into(),
        query: (!query.is_empty()).then_some(query),
        body,
        message: format!("{method} request processed successfully"),
    }))
}

/// Parse an optional JSON body. An empty body is `None`; anything else must
/// be well-formed JSON.
fn json_body(body: &Bytes) -> Result<Option<Value>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body)?))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::router::build_router;

    fn build_app() -> axum::Router {
        build_router(ServerConfig {
            ping_message: "pong from tests".into(),
            ..ServerConfig::default()
        })
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let resp = build_app().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn ping_returns_configured_message() {
        let req = Request::get("/api/ping").body(Body::empty()).unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "pong from tests"}));
    }

    #[tokio::test]
    async fn demo_get_has_no_received_data() {
        let req = Request::get("/api/demo").body(Body::empty()).unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello from Express server - GET request");
        assert!(body.get("receivedData").is_none());
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn demo_post_echoes_body() {
        let req = Request::post("/api/demo")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"hello":"world"}"#))
            .unwrap();
        let (_, body) = send(req).await;
        assert_eq!(body["message"], "Hello from Express server - POST request");
        assert_eq!(body["receivedData"], json!({"hello": "world"}));
    }

    #[tokio::test]
    async fn test_put_echoes_query_and_body() {
        let req = Request::put("/api/test?a=1&b=two")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"x":[1,2]}"#))
            .unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["method"], "PUT");
        assert_eq!(body["endpoint"], "/api/test");
        assert_eq!(body["query"], json!({"a": "1", "b": "two"}));
        assert_eq!(body["body"], json!({"x": [1, 2]}));
        assert_eq!(body["message"], "PUT request processed successfully");
    }

    #[tokio::test]
    async fn test_delete_omits_query_and_body() {
        let req = Request::delete("/api/test").body(Body::from("ignored")).unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("query").is_none());
        assert!(body.get("body").is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let req = Request::post("/api/test")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_json");
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let req = Request::get("/api/nowhere").body(Body::empty()).unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
    }
}
