//! Repository for the `quizzes` table.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::quiz::{CreateQuiz, Quiz, UpdateQuiz};

const COLUMNS: &str = "id, course_id, module_id, title, description, created_at, updated_at";

/// Provides CRUD operations for quizzes.
pub struct QuizRepo;

impl QuizRepo {
    pub async fn create(
        pool: &PgPool,
        course_id: DbId,
        input: &CreateQuiz,
    ) -> Result<Quiz, sqlx::Error> {
        let query = format!(
            "INSERT INTO quizzes (course_id, module_id, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quiz>(&query)
            .bind(course_id)
            .bind(input.module_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes WHERE id = $1");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_course(pool: &PgPool, course_id: DbId) -> Result<Vec<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes WHERE course_id = $1 ORDER BY id");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// IDs of every quiz in a course.
    pub async fn list_ids_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM quizzes WHERE course_id = $1 ORDER BY id")
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuiz,
    ) -> Result<Option<Quiz>, sqlx::Error> {
        let query = format!(
            "UPDATE quizzes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                module_id = COALESCE($4, module_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.module_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
