//! HTTP-level integration tests for registration, login and `/auth/me`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, TEST_PASSWORD};
use lms_core::roles::ROLE_STUDENT;
use lms_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

fn registration(username: &str, role: Option<&str>) -> serde_json::Value {
    json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": TEST_PASSWORD,
        "role": role,
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_defaults_to_student(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/register", registration("alice", None)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "alice");
    assert_eq!(json["role"], "student");
    assert!(json.get("password_hash").is_none(), "hash must never be serialized");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_as_instructor(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        registration("ada", Some("instructor")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["role"], "instructor");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_as_admin_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        registration("mallory", Some("admin")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_username_conflicts(pool: PgPool) {
    common::create_user(&pool, "taken", ROLE_STUDENT).await;
    let app = common::build_test_app(pool);

    let mut body = registration("taken", None);
    body["email"] = json!("other@test.com");
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_rejects_short_password_and_bad_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut short = registration("shorty", None);
    short["password"] = json!("1234");
    let response = post_json(app.clone(), "/api/v1/auth/register", short).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_email = registration("nomail", None);
    bad_email["email"] = json!("not-an-email");
    let response = post_json(app, "/api/v1/auth/register", bad_email).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_rejects_username_as_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = registration("longusername", None);
    body["password"] = json!("longusername");
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login and identity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_then_me(pool: PgPool) {
    let user = common::create_user(&pool, "bob", ROLE_STUDENT).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "bob", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["user"]["id"], user.id);
    let token = json["access_token"].as_str().unwrap().to_string();

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "bob");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password_or_unknown_user(pool: PgPool) {
    common::create_user(&pool, "bob", ROLE_STUDENT).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "bob", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "ghost", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_inactive_user_forbidden(pool: PgPool) {
    let user = common::create_user(&pool, "gone", ROLE_STUDENT).await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "gone", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_requires_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/auth/me", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
