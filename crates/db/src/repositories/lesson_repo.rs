//! Repository for the `lessons` table.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::lesson::{CreateLesson, Lesson, UpdateLesson};

const COLUMNS: &str = "id, module_id, title, lesson_type, content, content_url, \
                       duration_minutes, sort_order, created_at, updated_at";

/// Provides CRUD operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Insert a lesson under `module_id`. `sort_order` defaults to the end
    /// of the module.
    pub async fn create(
        pool: &PgPool,
        module_id: DbId,
        input: &CreateLesson,
    ) -> Result<Lesson, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons
                (module_id, title, lesson_type, content, content_url, duration_minutes, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6,
                COALESCE($7, (SELECT COALESCE(MAX(sort_order) + 1, 0)
                              FROM lessons WHERE module_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(module_id)
            .bind(&input.title)
            .bind(&input.lesson_type)
            .bind(&input.content)
            .bind(&input.content_url)
            .bind(input.duration_minutes)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a module's lessons in display order.
    pub async fn list_by_module(
        pool: &PgPool,
        module_id: DbId,
    ) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lessons WHERE module_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(module_id)
            .fetch_all(pool)
            .await
    }

    /// Total number of lessons in a course, flattened across its modules.
    pub async fn count_by_course(pool: &PgPool, course_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM lessons l
             JOIN modules m ON m.id = l.module_id
             WHERE m.course_id = $1",
        )
        .bind(course_id)
        .fetch_one(pool)
        .await
    }

    /// The course a lesson ultimately belongs to, if the lesson exists.
    pub async fn find_course_id(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT m.course_id FROM lessons l
             JOIN modules m ON m.id = l.module_id
             WHERE l.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLesson,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!(
            "UPDATE lessons SET
                title = COALESCE($2, title),
                lesson_type = COALESCE($3, lesson_type),
                content = COALESCE($4, content),
                content_url = COALESCE($5, content_url),
                duration_minutes = COALESCE($6, duration_minutes),
                sort_order = COALESCE($7, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.lesson_type)
            .bind(&input.content)
            .bind(&input.content_url)
            .bind(input.duration_minutes)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
