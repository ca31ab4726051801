//! Shared query parameter types for API handlers.

use lms_core::search::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// `(limit, offset)` clamped to the platform's page bounds.
    pub fn resolve(&self) -> (i64, i64) {
        (
            clamp_limit(self.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
            clamp_offset(self.offset),
        )
    }
}

/// Query parameters for `GET /courses`.
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub category: Option<String>,
}

impl CourseListParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}
