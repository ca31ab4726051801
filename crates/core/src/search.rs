//! Pagination bounds shared by list endpoints.

/// Default page size when `limit` is omitted.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
