//! Repository for the `reviews` table.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{Review, UpsertReview};

const COLUMNS: &str = "id, user_id, course_id, rating, comment, created_at, updated_at";

/// Provides course review operations.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Create or replace the user's review of a course.
    ///
    /// Uses `ON CONFLICT (user_id, course_id) DO UPDATE` to keep one review
    /// per user per course.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
        input: &UpsertReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (user_id, course_id, rating, comment)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, course_id) DO UPDATE SET
                rating = EXCLUDED.rating,
                comment = EXCLUDED.comment
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .bind(course_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A course's reviews, newest first.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE course_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
