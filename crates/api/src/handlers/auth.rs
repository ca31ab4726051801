//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::roles::{validate_self_assignable_role, ROLE_STUDENT};
use lms_db::models::user::{CreateUser, UserResponse};
use lms_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::{check_password_policy, hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    /// `student` (default) or `instructor`. Admins are never self-registered.
    pub role: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    check_password_policy(&input.password, &input.username)?;

    let role = input.role.as_deref().unwrap_or(ROLE_STUDENT);
    validate_self_assignable_role(role)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            role: role.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let issued = state
        .config
        .jwt
        .issue(user.id, &user.role)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(AuthResponse {
        access_token: issued.token,
        expires_in: issued.expires_in,
        user: UserResponse::from(&user),
    }))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserResponse>> {
    let row = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(CoreError::not_found("User", user.user_id))?;
    Ok(Json(UserResponse::from(&row)))
}
