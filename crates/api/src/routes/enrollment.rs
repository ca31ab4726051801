//! Route definitions for the `/enrollments` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET    /                                   -> list_mine
/// DELETE /{enrollment_id}                    -> delete
/// GET    /{enrollment_id}/progress           -> progress
/// PUT    /{enrollment_id}/lessons/{lesson_id} -> set_lesson_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollment::list_mine))
        .route("/{enrollment_id}", delete(enrollment::delete))
        .route("/{enrollment_id}/progress", get(enrollment::progress))
        .route(
            "/{enrollment_id}/lessons/{lesson_id}",
            put(enrollment::set_lesson_progress),
        )
}
