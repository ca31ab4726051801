//! Route definitions for the `/quizzes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{attempt, question, quiz};
use crate::state::AppState;

/// Routes mounted at `/quizzes`.
///
/// ```text
/// GET    /{quiz_id}             -> get_by_id (with questions)
/// PUT    /{quiz_id}             -> update
/// DELETE /{quiz_id}             -> delete
/// POST   /{quiz_id}/questions   -> question::create
/// POST   /{quiz_id}/attempts    -> attempt::submit
/// GET    /{quiz_id}/attempts    -> attempt::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{quiz_id}",
            get(quiz::get_by_id).put(quiz::update).delete(quiz::delete),
        )
        .route("/{quiz_id}/questions", post(question::create))
        .route(
            "/{quiz_id}/attempts",
            get(attempt::list).post(attempt::submit),
        )
}
