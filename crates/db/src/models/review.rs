//! Course review model and DTOs.

use lms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `reviews` table. One per (user, course).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body for `POST /courses/{course_id}/reviews`. Re-posting replaces the
/// caller's existing review.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertReview {
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    #[validate(length(max = 5000))]
    pub comment: Option<String>,
}

/// Reviews for a course plus their average.
#[derive(Debug, Clone, Serialize)]
pub struct CourseReviews {
    pub course_id: DbId,
    pub average_rating: Option<f64>,
    pub reviews: Vec<Review>,
}
