//! Shared response envelope types for API handlers.
//!
//! Plain entity CRUD returns the entity itself. Computed results (attempt
//! grading, progress, completion flags, analytics) use the `{ "data": ... }`
//! envelope via [`DataResponse`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: progress }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
