//! Derived completion flags and issued certificates for the caller.

use axum::extract::{Path, State};
use axum::Json;
use lms_core::types::DbId;
use lms_db::models::certificate::Certificate;
use lms_db::models::completion::UserModuleProgress;
use lms_db::repositories::{CertificateRepo, CompletionRepo};
use serde::Serialize;

use super::find_course;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// The caller's completion state in one course.
#[derive(Debug, Serialize)]
pub struct CourseCompletion {
    pub course_id: DbId,
    pub course_complete: bool,
    pub modules: Vec<UserModuleProgress>,
    pub certificate: Option<Certificate>,
}

/// GET /api/v1/courses/{course_id}/completion
///
/// Flags are only written by the attempt cascade, so a user who has never
/// attempted a quiz of the course sees no module rows and `false`.
pub async fn course_completion(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<DataResponse<CourseCompletion>>> {
    find_course(&state.pool, course_id).await?;

    let modules = CompletionRepo::list_module_flags(&state.pool, user.user_id, course_id).await?;
    let course_complete = CompletionRepo::find_course_flag(&state.pool, user.user_id, course_id)
        .await?
        .is_some_and(|flag| flag.is_completed);
    let certificate =
        CertificateRepo::find_by_user_and_course(&state.pool, user.user_id, course_id).await?;

    Ok(Json(DataResponse {
        data: CourseCompletion {
            course_id,
            course_complete,
            modules,
            certificate,
        },
    }))
}

/// GET /api/v1/certificates
pub async fn list_certificates(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Certificate>>> {
    let certificates = CertificateRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(certificates))
}
