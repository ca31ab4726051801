//! Handlers for course modules.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::types::DbId;
use lms_db::models::module::{CreateModule, Module, UpdateModule};
use lms_db::repositories::ModuleRepo;
use validator::Validate;

use super::{course_for_manager, find_course, find_module, module_for_manager};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/courses/{course_id}/modules
pub async fn list_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<Module>>> {
    find_course(&state.pool, course_id).await?;
    let modules = ModuleRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(modules))
}

/// POST /api/v1/courses/{course_id}/modules
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
    Json(input): Json<CreateModule>,
) -> AppResult<(StatusCode, Json<Module>)> {
    input.validate()?;
    course_for_manager(&state.pool, &user, course_id).await?;
    let module = ModuleRepo::create(&state.pool, course_id, &input).await?;
    Ok((StatusCode::CREATED, Json(module)))
}

/// GET /api/v1/modules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Module>> {
    Ok(Json(find_module(&state.pool, id).await?))
}

/// PUT /api/v1/modules/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateModule>,
) -> AppResult<Json<Module>> {
    input.validate()?;
    module_for_manager(&state.pool, &user, id).await?;
    let module = ModuleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Module", id))?;
    Ok(Json(module))
}

/// DELETE /api/v1/modules/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    module_for_manager(&state.pool, &user, id).await?;
    if ModuleRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found("Module", id).into())
    }
}
