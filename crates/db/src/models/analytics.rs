//! Aggregate row for course analytics.

use lms_core::analytics::CourseStats;
use sqlx::FromRow;

/// Raw counts for one course, produced by a single aggregate query.
#[derive(Debug, Clone, FromRow)]
pub struct CourseStatsRow {
    pub enrollment_count: i64,
    pub completed_enrollment_count: i64,
    pub review_count: i64,
    pub rating_sum: i64,
    pub attempt_count: i64,
    pub attempt_score_sum: i64,
    pub passed_attempt_count: i64,
}

impl From<CourseStatsRow> for CourseStats {
    fn from(row: CourseStatsRow) -> Self {
        Self {
            enrollment_count: row.enrollment_count,
            completed_enrollment_count: row.completed_enrollment_count,
            review_count: row.review_count,
            rating_sum: row.rating_sum,
            attempt_count: row.attempt_count,
            attempt_score_sum: row.attempt_score_sum,
            passed_attempt_count: row.passed_attempt_count,
        }
    }
}
