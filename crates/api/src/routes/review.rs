//! Route definitions for the `/reviews` resource.

use axum::routing::delete;
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// DELETE /{id} -> delete (own review, or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(review::delete))
}
