//! Enrollment lifecycle and per-lesson progress.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lms_core::access::ensure_self_or_manager;
use lms_core::error::CoreError;
use lms_core::progress::completion_percentage;
use lms_core::types::DbId;
use lms_db::models::enrollment::Enrollment;
use lms_db::models::progress::{Progress, SetLessonProgress};
use lms_db::repositories::{EnrollmentRepo, LessonRepo, ProgressRepo};
use serde::Serialize;
use sqlx::PgPool;

use super::find_course;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Lesson completion summary for one enrollment.
#[derive(Debug, Serialize)]
pub struct EnrollmentProgress {
    pub enrollment_id: DbId,
    pub course_id: DbId,
    pub completed_lessons: i64,
    pub total_lessons: i64,
    pub percentage: i32,
    pub lessons: Vec<Progress>,
}

/// Response for marking a single lesson.
#[derive(Debug, Serialize)]
pub struct LessonProgressUpdate {
    pub progress: Progress,
    pub percentage: i32,
}

async fn find_enrollment(pool: &PgPool, id: DbId) -> AppResult<Enrollment> {
    Ok(EnrollmentRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found("Enrollment", id))?)
}

async fn percentage_for(pool: &PgPool, enrollment: &Enrollment) -> AppResult<(i64, i64, i32)> {
    let total = LessonRepo::count_by_course(pool, enrollment.course_id).await?;
    let completed = ProgressRepo::count_completed(pool, enrollment.id).await?;
    Ok((completed, total, completion_percentage(completed, total)))
}

/// POST /api/v1/courses/{course_id}/enroll
///
/// Drafts only accept enrollments from the people who manage them.
pub async fn enroll(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(course_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    let course = find_course(&state.pool, course_id).await?;
    if !course.is_published && !user.actor().manages(course.instructor_id) {
        return Err(CoreError::Validation("Course is not open for enrollment".into()).into());
    }
    let enrollment = EnrollmentRepo::create(&state.pool, user.user_id, course_id).await?;
    tracing::info!(
        enrollment_id = enrollment.id,
        course_id,
        user_id = user.user_id,
        "User enrolled",
    );
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// GET /api/v1/enrollments
pub async fn list_mine(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<Vec<Enrollment>>> {
    let enrollments = EnrollmentRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(enrollments))
}

/// DELETE /api/v1/enrollments/{id}
///
/// Unenroll. Only the enrolled user or an admin may do this.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let enrollment = find_enrollment(&state.pool, id).await?;
    if enrollment.user_id != user.user_id && !user.actor().is_admin() {
        return Err(CoreError::forbidden("You can only cancel your own enrollment").into());
    }
    EnrollmentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/enrollments/{id}/progress
pub async fn progress(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EnrollmentProgress>>> {
    let enrollment = find_enrollment(&state.pool, id).await?;
    let course = find_course(&state.pool, enrollment.course_id).await?;
    ensure_self_or_manager(user.actor(), enrollment.user_id, course.instructor_id)?;

    let (completed, total, percentage) = percentage_for(&state.pool, &enrollment).await?;
    let lessons = ProgressRepo::list_by_enrollment(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: EnrollmentProgress {
            enrollment_id: enrollment.id,
            course_id: enrollment.course_id,
            completed_lessons: completed,
            total_lessons: total,
            percentage,
            lessons,
        },
    }))
}

/// PUT /api/v1/enrollments/{id}/lessons/{lesson_id}
///
/// Mark a lesson complete (default) or incomplete for the caller's own
/// enrollment. The lesson must belong to the enrolled course.
pub async fn set_lesson_progress(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, lesson_id)): Path<(DbId, DbId)>,
    Json(input): Json<SetLessonProgress>,
) -> AppResult<Json<DataResponse<LessonProgressUpdate>>> {
    let enrollment = find_enrollment(&state.pool, id).await?;
    if enrollment.user_id != user.user_id {
        return Err(
            CoreError::forbidden("You can only record progress on your own enrollment").into(),
        );
    }

    let lesson_course = LessonRepo::find_course_id(&state.pool, lesson_id)
        .await?
        .ok_or(CoreError::not_found("Lesson", lesson_id))?;
    if lesson_course != enrollment.course_id {
        return Err(CoreError::Validation(format!(
            "Lesson {lesson_id} is not part of course {}",
            enrollment.course_id
        ))
        .into());
    }

    let is_completed = input.is_completed.unwrap_or(true);
    let progress = ProgressRepo::upsert(&state.pool, id, lesson_id, is_completed).await?;
    let (_, _, percentage) = percentage_for(&state.pool, &enrollment).await?;

    tracing::debug!(
        enrollment_id = id,
        lesson_id,
        is_completed,
        percentage,
        "Lesson progress recorded",
    );

    Ok(Json(DataResponse {
        data: LessonProgressUpdate {
            progress,
            percentage,
        },
    }))
}
