//! Repository for the `enrollments` table.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::Enrollment;

const COLUMNS: &str = "id, user_id, course_id, completed_at, created_at, updated_at";

/// Provides enrollment lookups and lifecycle operations.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a user in a course.
    ///
    /// A second enrollment for the same pair violates
    /// `uq_enrollments_user_course` and surfaces as a conflict.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (user_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the enrollment for a (user, course) pair.
    pub async fn find_by_user_and_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the user is enrolled in the course.
    pub async fn exists(pool: &PgPool, user_id: DbId, course_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE user_id = $1 AND course_id = $2)",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await
    }

    /// List a user's enrollments, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Stamp `completed_at` on the user's enrollment if not already set.
    ///
    /// Returns `true` if a row was newly stamped.
    pub async fn mark_completed(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE enrollments SET completed_at = NOW()
             WHERE user_id = $1 AND course_id = $2 AND completed_at IS NULL",
        )
        .bind(user_id)
        .bind(course_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an enrollment and its progress rows. Returns `true` if removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
