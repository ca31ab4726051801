//! Lesson model and DTOs.

use lms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `lessons` table.
///
/// `lesson_type` is one of [`lms_core::lesson::VALID_LESSON_TYPES`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub module_id: DbId,
    pub title: String,
    pub lesson_type: String,
    pub content: Option<String>,
    pub content_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lesson. The module comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLesson {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub lesson_type: String,
    pub content: Option<String>,
    #[validate(url)]
    pub content_url: Option<String>,
    #[validate(range(min = 0))]
    pub duration_minutes: Option<i32>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLesson {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub lesson_type: Option<String>,
    pub content: Option<String>,
    #[validate(url)]
    pub content_url: Option<String>,
    #[validate(range(min = 0))]
    pub duration_minutes: Option<i32>,
    pub sort_order: Option<i32>,
}
