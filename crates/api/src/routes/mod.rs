pub mod auth;
pub mod course;
pub mod enrollment;
pub mod health;
pub mod lesson;
pub mod module;
pub mod question;
pub mod quiz;
pub mod review;

use axum::routing::get;
use axum::Router;

use crate::handlers::completion;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register, /auth/login, /auth/me
///
/// /courses                                  list (public), create (instructor)
/// /courses/mine                             caller's taught courses
/// /courses/{id}                             get, update, delete
/// /courses/{id}/modules                     list, create
/// /courses/{id}/quizzes                     list, create
/// /courses/{id}/enroll                      enroll caller (POST)
/// /courses/{id}/completion                  caller's module/course flags
/// /courses/{id}/reviews                     list, upsert own
/// /courses/{id}/analytics                   owner/admin analytics
///
/// /modules/{id}                             get, update, delete
/// /modules/{id}/lessons                     list (ordered), create
/// /lessons/{id}                             get, update, delete
///
/// /quizzes/{id}                             get (with questions), update, delete
/// /quizzes/{id}/questions                   create (POST)
/// /quizzes/{id}/attempts                    submit (POST), history (GET)
/// /questions/{id}                           update, delete
///
/// /enrollments                              caller's enrollments
/// /enrollments/{id}                         unenroll (DELETE)
/// /enrollments/{id}/progress                lesson completion percentage
/// /enrollments/{id}/lessons/{lesson_id}     mark lesson (PUT)
///
/// /certificates                             caller's certificates
/// /reviews/{id}                             delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/courses", course::router())
        .nest("/modules", module::router())
        .nest("/lessons", lesson::router())
        .nest("/quizzes", quiz::router())
        .nest("/questions", question::router())
        .nest("/enrollments", enrollment::router())
        .route("/certificates", get(completion::list_certificates))
        .nest("/reviews", review::router())
}
