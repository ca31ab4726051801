//! Course reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::rating::{average_rating, validate_rating};
use lms_core::types::DbId;
use lms_db::models::review::{CourseReviews, Review, UpsertReview};
use lms_db::repositories::{EnrollmentRepo, ReviewRepo};
use validator::Validate;

use super::find_course;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/courses/{course_id}/reviews
pub async fn list_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<CourseReviews>> {
    find_course(&state.pool, course_id).await?;
    let reviews = ReviewRepo::list_by_course(&state.pool, course_id).await?;
    let ratings: Vec<i16> = reviews.iter().map(|r| r.rating).collect();
    Ok(Json(CourseReviews {
        course_id,
        average_rating: average_rating(&ratings),
        reviews,
    }))
}

/// POST /api/v1/courses/{course_id}/reviews
///
/// Creates the caller's review or replaces their existing one. Only
/// enrolled users may review a course.
pub async fn upsert(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
    Json(input): Json<UpsertReview>,
) -> AppResult<Json<Review>> {
    input.validate()?;
    validate_rating(input.rating)?;
    find_course(&state.pool, course_id).await?;

    if !EnrollmentRepo::exists(&state.pool, user.user_id, course_id).await? {
        return Err(CoreError::forbidden("Only enrolled users may review a course").into());
    }

    let review = ReviewRepo::upsert(&state.pool, user.user_id, course_id, &input).await?;
    Ok(Json(review))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let review = ReviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Review", id))?;
    if review.user_id != user.user_id && !user.actor().is_admin() {
        return Err(CoreError::forbidden("You can only delete your own review").into());
    }
    ReviewRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
