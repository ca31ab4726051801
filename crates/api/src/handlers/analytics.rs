//! Per-course analytics for instructors and admins.

use axum::extract::{Path, State};
use axum::Json;
use lms_core::analytics::{summarize, CourseAnalytics, CourseStats};
use lms_core::types::DbId;
use lms_db::repositories::AnalyticsRepo;

use super::course_for_manager;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/courses/{course_id}/analytics
pub async fn course_analytics(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<DataResponse<CourseAnalytics>>> {
    course_for_manager(&state.pool, &user, course_id).await?;
    let stats: CourseStats = AnalyticsRepo::course_stats(&state.pool, course_id)
        .await?
        .into();
    Ok(Json(DataResponse {
        data: summarize(course_id, &stats),
    }))
}
