//! Repository for the `courses` table.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, instructor_id, title, description, category, level, \
                       thumbnail_url, is_published, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course owned by `instructor_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        instructor_id: DbId,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses
                (instructor_id, title, description, category, level, thumbnail_url, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(instructor_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.level)
            .bind(&input.thumbnail_url)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a course by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published courses, newest first, optionally filtered by category.
    pub async fn list_published(
        pool: &PgPool,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE is_published = true AND ($1::TEXT IS NULL OR category = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List every course taught by an instructor, drafts included.
    pub async fn list_by_instructor(
        pool: &PgPool,
        instructor_id: DbId,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses WHERE instructor_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(instructor_id)
            .fetch_all(pool)
            .await
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                level = COALESCE($5, level),
                thumbnail_url = COALESCE($6, thumbnail_url),
                is_published = COALESCE($7, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.level)
            .bind(&input.thumbnail_url)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course and (via cascade) its modules, lessons and quizzes.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
