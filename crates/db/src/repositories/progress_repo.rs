//! Repository for the `progress` table (per-lesson completion).

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::Progress;

const COLUMNS: &str =
    "id, enrollment_id, lesson_id, is_completed, completed_at, created_at, updated_at";

/// Provides per-lesson progress operations.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Set the completion flag for an (enrollment, lesson) pair.
    ///
    /// Uses `ON CONFLICT (enrollment_id, lesson_id) DO UPDATE` so there is at
    /// most one row per pair. `completed_at` keeps the first completion time
    /// and is cleared when a lesson is marked incomplete again.
    pub async fn upsert(
        pool: &PgPool,
        enrollment_id: DbId,
        lesson_id: DbId,
        is_completed: bool,
    ) -> Result<Progress, sqlx::Error> {
        let query = format!(
            "INSERT INTO progress (enrollment_id, lesson_id, is_completed, completed_at)
             VALUES ($1, $2, $3, CASE WHEN $3 THEN NOW() END)
             ON CONFLICT (enrollment_id, lesson_id) DO UPDATE SET
                is_completed = EXCLUDED.is_completed,
                completed_at = CASE
                    WHEN EXCLUDED.is_completed THEN COALESCE(progress.completed_at, NOW())
                END
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(enrollment_id)
            .bind(lesson_id)
            .bind(is_completed)
            .fetch_one(pool)
            .await
    }

    /// List all progress rows for an enrollment.
    pub async fn list_by_enrollment(
        pool: &PgPool,
        enrollment_id: DbId,
    ) -> Result<Vec<Progress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM progress WHERE enrollment_id = $1 ORDER BY lesson_id"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(enrollment_id)
            .fetch_all(pool)
            .await
    }

    /// Count completed lessons for an enrollment, restricted to lessons that
    /// belong to the enrolled course.
    pub async fn count_completed(pool: &PgPool, enrollment_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM progress p
             JOIN enrollments e ON e.id = p.enrollment_id
             JOIN lessons l ON l.id = p.lesson_id
             JOIN modules m ON m.id = l.module_id
             WHERE p.enrollment_id = $1 AND p.is_completed AND m.course_id = e.course_id",
        )
        .bind(enrollment_id)
        .fetch_one(pool)
        .await
    }
}
