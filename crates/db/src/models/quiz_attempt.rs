//! Quiz attempt model.

use lms_core::grading::SubmittedAnswer;
use lms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `quiz_attempts` table.
///
/// `answers` is the submission exactly as received; `score` is the rounded
/// percentage and `passed` is derived from the unrounded one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizAttempt {
    pub id: DbId,
    pub user_id: DbId,
    pub quiz_id: DbId,
    pub answers: Json<Vec<SubmittedAnswer>>,
    pub score: i32,
    pub passed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a graded attempt.
#[derive(Debug, Clone)]
pub struct CreateQuizAttempt {
    pub user_id: DbId,
    pub quiz_id: DbId,
    pub answers: Vec<SubmittedAnswer>,
    pub score: i32,
    pub passed: bool,
}
