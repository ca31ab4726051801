//! The signed-in user, taken from `Authorization: Bearer <token>`.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use lms_core::access::Actor;
use lms_core::error::CoreError;
use lms_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

impl AuthUser {
    /// View of this user for access checks in `lms_core::access`.
    pub fn actor(&self) -> Actor<'_> {
        Actor::new(self.user_id, &self.role)
    }
}

/// Pull the token out of the `Authorization` header. The scheme name is
/// matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Result<&str, CoreError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?
        .to_str()
        .map_err(|_| CoreError::Unauthorized("Malformed Authorization header".into()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.trim())
        }
        _ => Err(CoreError::Unauthorized(
            "Expected Authorization: Bearer <token>".into(),
        )),
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.config.jwt.verify(token).map_err(|err| {
            tracing::debug!(error = %err, "Rejected bearer token");
            CoreError::Unauthorized("Invalid or expired token".into())
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
