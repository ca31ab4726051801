//! Route definitions for the `/lessons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lesson;
use crate::state::AppState;

/// Routes mounted at `/lessons`.
///
/// ```text
/// GET    /{id} -> get_by_id
/// PUT    /{id} -> update
/// DELETE /{id} -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(lesson::get_by_id)
            .put(lesson::update)
            .delete(lesson::delete),
    )
}
