//! Handlers for lessons within a module.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::lesson::validate_lesson_content;
use lms_core::types::DbId;
use lms_db::models::lesson::{CreateLesson, Lesson, UpdateLesson};
use lms_db::repositories::LessonRepo;
use sqlx::PgPool;
use validator::Validate;

use super::{find_module, module_for_manager};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

async fn find_lesson(pool: &PgPool, id: DbId) -> AppResult<Lesson> {
    Ok(LessonRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found("Lesson", id))?)
}

/// GET /api/v1/modules/{module_id}/lessons
///
/// Lessons in display order (`sort_order`, then id).
pub async fn list_by_module(
    State(state): State<AppState>,
    Path(module_id): Path<DbId>,
) -> AppResult<Json<Vec<Lesson>>> {
    find_module(&state.pool, module_id).await?;
    let lessons = LessonRepo::list_by_module(&state.pool, module_id).await?;
    Ok(Json(lessons))
}

/// POST /api/v1/modules/{module_id}/lessons
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(module_id): Path<DbId>,
    Json(input): Json<CreateLesson>,
) -> AppResult<(StatusCode, Json<Lesson>)> {
    input.validate()?;
    validate_lesson_content(&input.lesson_type, input.content_url.as_deref())?;
    module_for_manager(&state.pool, &user, module_id).await?;
    let lesson = LessonRepo::create(&state.pool, module_id, &input).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// GET /api/v1/lessons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lesson>> {
    Ok(Json(find_lesson(&state.pool, id).await?))
}

/// PUT /api/v1/lessons/{id}
///
/// The type/URL rule is checked against the lesson as it will be after the
/// update, so switching a text lesson to video requires a URL.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLesson>,
) -> AppResult<Json<Lesson>> {
    input.validate()?;
    let existing = find_lesson(&state.pool, id).await?;
    module_for_manager(&state.pool, &user, existing.module_id).await?;

    let lesson_type = input.lesson_type.as_deref().unwrap_or(&existing.lesson_type);
    let content_url = input
        .content_url
        .as_deref()
        .or(existing.content_url.as_deref());
    validate_lesson_content(lesson_type, content_url)?;

    let lesson = LessonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Lesson", id))?;
    Ok(Json(lesson))
}

/// DELETE /api/v1/lessons/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find_lesson(&state.pool, id).await?;
    module_for_manager(&state.pool, &user, existing.module_id).await?;
    LessonRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
