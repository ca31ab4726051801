//! Aggregate queries backing course analytics.

use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::analytics::CourseStatsRow;

/// Read-only aggregate queries.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Count enrollments, reviews and quiz attempts for one course in a
    /// single round trip.
    pub async fn course_stats(pool: &PgPool, course_id: DbId) -> Result<CourseStatsRow, sqlx::Error> {
        sqlx::query_as::<_, CourseStatsRow>(
            "SELECT
                (SELECT COUNT(*) FROM enrollments WHERE course_id = $1)
                    AS enrollment_count,
                (SELECT COUNT(*) FROM enrollments WHERE course_id = $1 AND completed_at IS NOT NULL)
                    AS completed_enrollment_count,
                (SELECT COUNT(*) FROM reviews WHERE course_id = $1)
                    AS review_count,
                (SELECT COALESCE(SUM(rating), 0)::BIGINT FROM reviews WHERE course_id = $1)
                    AS rating_sum,
                (SELECT COUNT(*) FROM quiz_attempts a JOIN quizzes q ON q.id = a.quiz_id
                    WHERE q.course_id = $1)
                    AS attempt_count,
                (SELECT COALESCE(SUM(a.score), 0)::BIGINT FROM quiz_attempts a
                    JOIN quizzes q ON q.id = a.quiz_id WHERE q.course_id = $1)
                    AS attempt_score_sum,
                (SELECT COUNT(*) FROM quiz_attempts a JOIN quizzes q ON q.id = a.quiz_id
                    WHERE q.course_id = $1 AND a.passed)
                    AS passed_attempt_count",
        )
        .bind(course_id)
        .fetch_one(pool)
        .await
    }
}
