//! Repository for the `quiz_attempts` table.

use lms_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::quiz_attempt::{CreateQuizAttempt, QuizAttempt};

const COLUMNS: &str = "id, user_id, quiz_id, answers, score, passed, created_at, updated_at";

/// Provides persistence for graded quiz attempts.
pub struct QuizAttemptRepo;

impl QuizAttemptRepo {
    /// Insert a graded attempt, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuizAttempt,
    ) -> Result<QuizAttempt, sqlx::Error> {
        let query = format!(
            "INSERT INTO quiz_attempts (user_id, quiz_id, answers, score, passed)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(input.user_id)
            .bind(input.quiz_id)
            .bind(Json(&input.answers))
            .bind(input.score)
            .bind(input.passed)
            .fetch_one(pool)
            .await
    }

    /// A user's attempts on one quiz, newest first.
    pub async fn list_by_user_and_quiz(
        pool: &PgPool,
        user_id: DbId,
        quiz_id: DbId,
    ) -> Result<Vec<QuizAttempt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quiz_attempts
             WHERE user_id = $1 AND quiz_id = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(user_id)
            .bind(quiz_id)
            .fetch_all(pool)
            .await
    }

    /// Every attempt on a quiz, newest first.
    pub async fn list_by_quiz(pool: &PgPool, quiz_id: DbId) -> Result<Vec<QuizAttempt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quiz_attempts WHERE quiz_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(quiz_id)
            .fetch_all(pool)
            .await
    }

    /// Quizzes of `course_id` on which the user has at least one passing attempt.
    pub async fn passed_quiz_ids(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT DISTINCT a.quiz_id FROM quiz_attempts a
             JOIN quizzes q ON q.id = a.quiz_id
             WHERE a.user_id = $1 AND q.course_id = $2 AND a.passed",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_all(pool)
        .await
    }
}
