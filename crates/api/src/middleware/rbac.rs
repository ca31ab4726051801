//! Role gates that run before a handler body.
//!
//! Only coarse role checks live here. Whether a user manages a particular
//! course is decided in the handlers through `lms_core::access`, after the
//! course has been loaded.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lms_core::error::CoreError;
use lms_core::roles::can_author_courses;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Instructor or admin; anyone else gets 403.
pub struct RequireInstructor(pub AuthUser);

impl FromRequestParts<AppState> for RequireInstructor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !can_author_courses(&user.role) {
            return Err(
                CoreError::forbidden("Only instructors and admins can author courses").into(),
            );
        }
        Ok(RequireInstructor(user))
    }
}

/// Any signed-in user. Same as [`AuthUser`], spelled out in signatures
/// where the requirement is the point.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_request_parts(parts, state)
            .await
            .map(RequireAuth)
    }
}
