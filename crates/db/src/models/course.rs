//! Course entity model and DTOs.

use lms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub instructor_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a course. The instructor is the authenticated caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourse {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 50))]
    pub level: Option<String>,
    #[validate(url)]
    pub thumbnail_url: Option<String>,
    /// Defaults to `false` (draft) if omitted.
    pub is_published: Option<bool>,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 50))]
    pub level: Option<String>,
    #[validate(url)]
    pub thumbnail_url: Option<String>,
    pub is_published: Option<bool>,
}
