//! Handlers for the `/courses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::types::DbId;
use lms_db::models::course::{Course, CreateCourse, UpdateCourse};
use lms_db::repositories::CourseRepo;
use validator::Validate;

use super::{course_for_manager, find_course};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireInstructor;
use crate::query::CourseListParams;
use crate::state::AppState;

/// GET /api/v1/courses
///
/// Published courses only, newest first, optionally filtered by `category`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> AppResult<Json<Vec<Course>>> {
    let (limit, offset) = params.pagination().resolve();
    let courses =
        CourseRepo::list_published(&state.pool, params.category.as_deref(), limit, offset)
            .await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/mine
///
/// Every course the calling instructor teaches, drafts included.
pub async fn list_mine(
    State(state): State<AppState>,
    RequireInstructor(user): RequireInstructor,
) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list_by_instructor(&state.pool, user.user_id).await?;
    Ok(Json(courses))
}

/// POST /api/v1/courses
///
/// The caller becomes the course's instructor.
pub async fn create(
    State(state): State<AppState>,
    RequireInstructor(user): RequireInstructor,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    input.validate()?;
    let course = CourseRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(course_id = course.id, instructor_id = user.user_id, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    Ok(Json(find_course(&state.pool, id).await?))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    input.validate()?;
    course_for_manager(&state.pool, &user, id).await?;
    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Course", id))?;
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
///
/// Removes the course with its modules, lessons, quizzes and enrollments.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    course_for_manager(&state.pool, &user, id).await?;
    if CourseRepo::delete(&state.pool, id).await? {
        tracing::info!(course_id = id, user_id = user.user_id, "Course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Course", id).into())
    }
}
