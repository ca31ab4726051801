//! HTTP handlers, one module per resource.
//!
//! The lookup helpers below load a parent row or fail with 404, and the
//! `*_for_manager` variants additionally require the caller to own the
//! course (or be an admin).

pub mod analytics;
pub mod attempt;
pub mod auth;
pub mod completion;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod module;
pub mod question;
pub mod quiz;
pub mod review;

use lms_core::access::ensure_course_manager;
use lms_core::error::CoreError;
use lms_core::types::DbId;
use lms_db::models::course::Course;
use lms_db::models::module::Module;
use lms_db::models::quiz::Quiz;
use lms_db::repositories::{CourseRepo, ModuleRepo, QuizRepo};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;

pub(crate) async fn find_course(pool: &PgPool, id: DbId) -> AppResult<Course> {
    Ok(CourseRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found("Course", id))?)
}

pub(crate) async fn find_module(pool: &PgPool, id: DbId) -> AppResult<Module> {
    Ok(ModuleRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found("Module", id))?)
}

pub(crate) async fn find_quiz(pool: &PgPool, id: DbId) -> AppResult<Quiz> {
    Ok(QuizRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found("Quiz", id))?)
}

/// Load a course and require the caller to manage it.
pub(crate) async fn course_for_manager(
    pool: &PgPool,
    user: &AuthUser,
    course_id: DbId,
) -> AppResult<Course> {
    let course = find_course(pool, course_id).await?;
    ensure_course_manager(user.actor(), course.instructor_id)?;
    Ok(course)
}

/// Load a module and its course, requiring the caller to manage the course.
pub(crate) async fn module_for_manager(
    pool: &PgPool,
    user: &AuthUser,
    module_id: DbId,
) -> AppResult<(Module, Course)> {
    let module = find_module(pool, module_id).await?;
    let course = course_for_manager(pool, user, module.course_id).await?;
    Ok((module, course))
}

/// Load a quiz and its course, requiring the caller to manage the course.
pub(crate) async fn quiz_for_manager(
    pool: &PgPool,
    user: &AuthUser,
    quiz_id: DbId,
) -> AppResult<(Quiz, Course)> {
    let quiz = find_quiz(pool, quiz_id).await?;
    let course = course_for_manager(pool, user, quiz.course_id).await?;
    Ok((quiz, course))
}
