//! Per-course analytics derived from aggregate counts.
//!
//! The database layer supplies raw counts and sums ([`CourseStats`]); this
//! module turns them into rates and averages.

use serde::Serialize;

use crate::rating::round_to_tenth;
use crate::types::DbId;

/// Raw aggregates for one course as counted by the database.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseStats {
    pub enrollment_count: i64,
    pub completed_enrollment_count: i64,
    pub review_count: i64,
    pub rating_sum: i64,
    pub attempt_count: i64,
    pub attempt_score_sum: i64,
    pub passed_attempt_count: i64,
}

/// Analytics payload for `GET /courses/{id}/analytics`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseAnalytics {
    pub course_id: DbId,
    pub enrollment_count: i64,
    pub completed_enrollment_count: i64,
    pub completion_rate: f64,
    pub review_count: i64,
    pub average_rating: Option<f64>,
    pub attempt_count: i64,
    pub average_attempt_score: Option<f64>,
    pub pass_rate: f64,
}

/// `part / whole * 100` rounded to one decimal, or 0 when `whole` is 0.
pub fn rate_pct(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    round_to_tenth(part as f64 * 100.0 / whole as f64)
}

fn mean(sum: i64, count: i64) -> Option<f64> {
    (count > 0).then(|| round_to_tenth(sum as f64 / count as f64))
}

/// Turn raw aggregates into the analytics payload.
pub fn summarize(course_id: DbId, stats: &CourseStats) -> CourseAnalytics {
    CourseAnalytics {
        course_id,
        enrollment_count: stats.enrollment_count,
        completed_enrollment_count: stats.completed_enrollment_count,
        completion_rate: rate_pct(stats.completed_enrollment_count, stats.enrollment_count),
        review_count: stats.review_count,
        average_rating: mean(stats.rating_sum, stats.review_count),
        attempt_count: stats.attempt_count,
        average_attempt_score: mean(stats.attempt_score_sum, stats.attempt_count),
        pass_rate: rate_pct(stats.passed_attempt_count, stats.attempt_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_course_has_zero_rates_and_no_averages() {
        let a = summarize(1, &CourseStats::default());
        assert_eq!(a.completion_rate, 0.0);
        assert_eq!(a.pass_rate, 0.0);
        assert_eq!(a.average_rating, None);
        assert_eq!(a.average_attempt_score, None);
    }

    #[test]
    fn rates_and_averages() {
        let stats = CourseStats {
            enrollment_count: 3,
            completed_enrollment_count: 1,
            review_count: 2,
            rating_sum: 9,
            attempt_count: 4,
            attempt_score_sum: 250,
            passed_attempt_count: 3,
        };
        let a = summarize(7, &stats);
        assert_eq!(a.course_id, 7);
        assert_eq!(a.completion_rate, 33.3);
        assert_eq!(a.average_rating, Some(4.5));
        assert_eq!(a.average_attempt_score, Some(62.5));
        assert_eq!(a.pass_rate, 75.0);
    }
}
