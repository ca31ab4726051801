//! Derived module/course completion flags.

use lms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `user_module_progress`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserModuleProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub module_id: DbId,
    pub is_completed: bool,
    pub updated_at: Timestamp,
}

/// A row from `user_course_progress`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserCourseProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub is_completed: bool,
    pub updated_at: Timestamp,
}
