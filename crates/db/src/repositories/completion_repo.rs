//! Repository for the derived `user_module_progress` and
//! `user_course_progress` flags.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::completion::{UserCourseProgress, UserModuleProgress};

const MODULE_COLUMNS: &str = "id, user_id, module_id, is_completed, updated_at";
const COURSE_COLUMNS: &str = "id, user_id, course_id, is_completed, updated_at";

/// Upserts and reads derived completion flags.
pub struct CompletionRepo;

impl CompletionRepo {
    /// Upsert the flag keyed by (user, module).
    pub async fn upsert_module(
        pool: &PgPool,
        user_id: DbId,
        module_id: DbId,
        is_completed: bool,
    ) -> Result<UserModuleProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_module_progress (user_id, module_id, is_completed)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, module_id) DO UPDATE SET is_completed = EXCLUDED.is_completed
             RETURNING {MODULE_COLUMNS}"
        );
        sqlx::query_as::<_, UserModuleProgress>(&query)
            .bind(user_id)
            .bind(module_id)
            .bind(is_completed)
            .fetch_one(pool)
            .await
    }

    /// Upsert the flag keyed by (user, course).
    pub async fn upsert_course(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
        is_completed: bool,
    ) -> Result<UserCourseProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_course_progress (user_id, course_id, is_completed)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, course_id) DO UPDATE SET is_completed = EXCLUDED.is_completed
             RETURNING {COURSE_COLUMNS}"
        );
        sqlx::query_as::<_, UserCourseProgress>(&query)
            .bind(user_id)
            .bind(course_id)
            .bind(is_completed)
            .fetch_one(pool)
            .await
    }

    /// The user's module flags for every module of a course that has one.
    pub async fn list_module_flags(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Vec<UserModuleProgress>, sqlx::Error> {
        sqlx::query_as::<_, UserModuleProgress>(
            "SELECT ump.id, ump.user_id, ump.module_id, ump.is_completed, ump.updated_at
             FROM user_module_progress ump
             JOIN modules m ON m.id = ump.module_id
             WHERE ump.user_id = $1 AND m.course_id = $2
             ORDER BY m.sort_order, m.id",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_all(pool)
        .await
    }

    pub async fn find_course_flag(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Option<UserCourseProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COURSE_COLUMNS} FROM user_course_progress WHERE user_id = $1 AND course_id = $2"
        );
        sqlx::query_as::<_, UserCourseProgress>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }
}
