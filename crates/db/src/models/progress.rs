//! Per-lesson progress model.

use lms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `progress` table. Unique per (enrollment, lesson).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Progress {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub lesson_id: DbId,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body for `PUT /enrollments/{id}/lessons/{lesson_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetLessonProgress {
    /// Defaults to `true` if omitted.
    pub is_completed: Option<bool>,
}
