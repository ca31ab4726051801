#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use lms_api::auth::jwt::JwtConfig;
use lms_api::auth::password::hash_password;
use lms_api::config::ServerConfig;
use lms_api::router::build_app_router;
use lms_api::state::AppState;
use lms_db::models::course::{Course, CreateCourse};
use lms_db::models::enrollment::Enrollment;
use lms_db::models::user::{CreateUser, User};
use lms_db::repositories::{CourseRepo, EnrollmentRepo, UserRepo};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "test_password_123";
pub const CERT_BASE: &str = "https://certs.example.com";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        certificate_base_url: CERT_BASE.to_string(),
    }
}

/// Build the full application router (same middleware stack as production)
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`] directly into the database.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        role: role.to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Mint an access token for `user` signed with the test secret.
pub fn token_for(user: &User) -> String {
    test_config()
        .jwt
        .issue(user.id, &user.role)
        .expect("token generation should succeed")
        .token
}

/// Insert a published course taught by `instructor`.
pub async fn create_course(pool: &PgPool, instructor: &User, title: &str) -> Course {
    let input = CreateCourse {
        title: title.to_string(),
        description: None,
        category: Some("programming".to_string()),
        level: None,
        thumbnail_url: None,
        is_published: Some(true),
    };
    CourseRepo::create(pool, instructor.id, &input)
        .await
        .expect("course creation should succeed")
}

pub async fn enroll(pool: &PgPool, user: &User, course: &Course) -> Enrollment {
    EnrollmentRepo::create(pool, user.id, course.id)
        .await
        .expect("enrollment should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
