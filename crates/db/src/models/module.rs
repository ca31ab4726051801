//! Course module model and DTOs.

use lms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Module {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a module. The course comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateModule {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateModule {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
