//! Repository for the `modules` table.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::module::{CreateModule, Module, UpdateModule};

const COLUMNS: &str = "id, course_id, title, description, sort_order, created_at, updated_at";

/// Provides CRUD operations for course modules.
pub struct ModuleRepo;

impl ModuleRepo {
    /// Insert a module under `course_id`. `sort_order` defaults to 0.
    pub async fn create(
        pool: &PgPool,
        course_id: DbId,
        input: &CreateModule,
    ) -> Result<Module, sqlx::Error> {
        let query = format!(
            "INSERT INTO modules (course_id, title, description, sort_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(course_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Module>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM modules WHERE id = $1");
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a course's modules in display order.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM modules WHERE course_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// IDs of every module in a course.
    pub async fn list_ids_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM modules WHERE course_id = $1 ORDER BY id")
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateModule,
    ) -> Result<Option<Module>, sqlx::Error> {
        let query = format!(
            "UPDATE modules SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a module and its lessons. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM modules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
