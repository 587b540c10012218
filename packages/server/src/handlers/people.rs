//! User and student handlers: `/api/users…`, `/api/students…`.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use mitra::{StudentForm, UserForm};
use mitra_api::{Ack, ApiResponse, Student, User};

use crate::error::AppError;

use super::{new_id, now, FormBody};

fn user(id: String, form: UserForm) -> User {
    let stamp = now();
    User {
        id,
        name: form.name,
        email: form.email,
        role: form.role,
        avatar: None,
        created_at: stamp.clone(),
        updated_at: stamp,
    }
}

fn student(id: String, form: StudentForm) -> Student {
    let stamp = now();
    Student {
        id,
        name: form.name,
        age: form.age,
        grade: form.grade,
        parent_id: form.parent_id,
        risk_score: 0.0,
        last_mood_entry: None,
        created_at: stamp.clone(),
        updated_at: stamp,
    }
}

/// `GET /api/users`
pub async fn list_users() -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `POST /api/users`
pub async fn create_user(FormBody(form): FormBody<UserForm>) -> impl IntoResponse {
    tracing::info!(role = ?form.role, "user created");
    (StatusCode::CREATED, Json(ApiResponse::ok(user(new_id(), form))))
}

/// `GET /api/users/{id}`
pub async fn get_user(Path(id): Path<String>) -> AppError {
    AppError::NotFound(format!("user {id} not found"))
}

/// `PUT /api/users/{id}`
pub async fn update_user(
    Path(id): Path<String>,
    FormBody(form): FormBody<UserForm>,
) -> Json<ApiResponse<User>> {
    Json(ApiResponse::ok(user(id, form)))
}

/// `DELETE /api/users/{id}`
pub async fn delete_user(Path(id): Path<String>) -> Json<ApiResponse<Ack>> {
    Json(ApiResponse::done(format!("user {id} deleted")))
}

/// `GET /api/students`
pub async fn list_students() -> Json<ApiResponse<Vec<Student>>> {
    Json(ApiResponse::ok(Vec::new()))
}

/// `POST /api/students`
pub async fn create_student(FormBody(form): FormBody<StudentForm>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(ApiResponse::ok(student(new_id(), form))))
}

/// `GET /api/students/{id}`
pub async fn get_student(Path(id): Path<String>) -> AppError {
    AppError::NotFound(format!("student {id} not found"))
}

/// `PUT /api/students/{id}`
pub async fn update_student(
    Path(id): Path<String>,
    FormBody(form): FormBody<StudentForm>,
) -> Json<ApiResponse<Student>> {
    Json(ApiResponse::ok(student(id, form)))
}

/// `DELETE /api/students/{id}`
pub async fn delete_student(Path(id): Path<String>) -> Json<ApiResponse<Ack>> {
    Json(ApiResponse::done(format!("student {id} deleted")))
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

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let resp = build_router(ServerConfig::default()).oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_student_coerces_and_echoes() {
        let (status, body) = send(post(
            "/api/students",
            json!({"name": "Asha", "age": "12", "grade": "7", "parentId": "p-1"}),
        ))
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["age"], 12);
        assert_eq!(body["data"]["parentId"], "p-1");
        assert!(body["data"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn create_user_reports_every_bad_field() {
        let (status, body) = send(post(
            "/api/users",
            json!({"name": "A", "email": "nope", "role": "admin"}),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "validation_failed");
        let paths: Vec<_> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["path"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(paths, ["name", "email", "role"]);
    }

    #[tokio::test]
    async fn get_unknown_user_is_404() {
        let req = Request::get("/api/users/u-1").body(Body::empty()).unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "user u-1 not found");
    }

    #[tokio::test]
    async fn delete_acknowledges() {
        let req = Request::delete("/api/students/s-9").body(Body::empty()).unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "message": "student s-9 deleted"}));
    }
}
