//! Quiz model and DTOs.

use lms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `quizzes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quiz {
    pub id: DbId,
    pub course_id: DbId,
    pub module_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a quiz. The course comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuiz {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    /// Optional module association; must belong to the same course.
    pub module_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuiz {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub module_id: Option<DbId>,
}
