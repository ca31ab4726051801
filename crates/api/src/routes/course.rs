//! Route definitions for the `/courses` resource.
//!
//! Also nests the course-scoped collections (modules, quizzes, reviews)
//! under `/courses/{course_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{analytics, completion, course, enrollment, module, quiz, review};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                              -> list (published, paginated)
/// POST   /                              -> create
/// GET    /mine                          -> list_mine
/// GET    /{course_id}                   -> get_by_id
/// PUT    /{course_id}                   -> update
/// DELETE /{course_id}                   -> delete
///
/// GET    /{course_id}/modules           -> module::list_by_course
/// POST   /{course_id}/modules           -> module::create
/// GET    /{course_id}/quizzes           -> quiz::list_by_course
/// POST   /{course_id}/quizzes           -> quiz::create
/// POST   /{course_id}/enroll            -> enrollment::enroll
/// GET    /{course_id}/completion        -> completion::course_completion
/// GET    /{course_id}/reviews           -> review::list_by_course
/// POST   /{course_id}/reviews           -> review::upsert
/// GET    /{course_id}/analytics         -> analytics::course_analytics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list).post(course::create))
        .route("/mine", get(course::list_mine))
        .route(
            "/{course_id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .route(
            "/{course_id}/modules",
            get(module::list_by_course).post(module::create),
        )
        .route(
            "/{course_id}/quizzes",
            get(quiz::list_by_course).post(quiz::create),
        )
        .route("/{course_id}/enroll", post(enrollment::enroll))
        .route("/{course_id}/completion", get(completion::course_completion))
        .route(
            "/{course_id}/reviews",
            get(review::list_by_course).post(review::upsert),
        )
        .route("/{course_id}/analytics", get(analytics::course_analytics))
}
