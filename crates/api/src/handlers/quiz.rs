//! Handlers for quizzes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::types::DbId;
use lms_db::models::question::{PublicQuestion, QuestionWithOptions};
use lms_db::models::quiz::{CreateQuiz, Quiz, UpdateQuiz};
use lms_db::repositories::{QuestionRepo, QuizRepo};
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

use super::{course_for_manager, find_course, find_module, find_quiz, quiz_for_manager};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Questions as shown to the caller: full answer keys for course managers,
/// redacted for everyone else.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizQuestions {
    Full(Vec<QuestionWithOptions>),
    Redacted(Vec<PublicQuestion>),
}

/// Response for `GET /quizzes/{id}`.
#[derive(Debug, Serialize)]
pub struct QuizDetail {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: QuizQuestions,
}

/// A quiz may only be attached to a module of its own course.
async fn ensure_module_in_course(
    pool: &PgPool,
    module_id: Option<DbId>,
    course_id: DbId,
) -> AppResult<()> {
    if let Some(module_id) = module_id {
        let module = find_module(pool, module_id).await?;
        if module.course_id != course_id {
            return Err(CoreError::Validation(format!(
                "Module {module_id} does not belong to course {course_id}"
            ))
            .into());
        }
    }
    Ok(())
}

/// GET /api/v1/courses/{course_id}/quizzes
pub async fn list_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<Quiz>>> {
    find_course(&state.pool, course_id).await?;
    let quizzes = QuizRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(quizzes))
}

/// POST /api/v1/courses/{course_id}/quizzes
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
    Json(input): Json<CreateQuiz>,
) -> AppResult<(StatusCode, Json<Quiz>)> {
    input.validate()?;
    course_for_manager(&state.pool, &user, course_id).await?;
    ensure_module_in_course(&state.pool, input.module_id, course_id).await?;
    let quiz = QuizRepo::create(&state.pool, course_id, &input).await?;
    Ok((StatusCode::CREATED, Json(quiz)))
}

/// GET /api/v1/quizzes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<QuizDetail>> {
    let quiz = find_quiz(&state.pool, id).await?;
    let course = find_course(&state.pool, quiz.course_id).await?;
    let questions = QuestionRepo::list_with_options_by_quiz(&state.pool, id).await?;

    let questions = if user.actor().manages(course.instructor_id) {
        QuizQuestions::Full(questions)
    } else {
        QuizQuestions::Redacted(questions.iter().map(QuestionWithOptions::redacted).collect())
    };

    Ok(Json(QuizDetail { quiz, questions }))
}

/// PUT /api/v1/quizzes/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuiz>,
) -> AppResult<Json<Quiz>> {
    input.validate()?;
    let (quiz, _) = quiz_for_manager(&state.pool, &user, id).await?;
    ensure_module_in_course(&state.pool, input.module_id, quiz.course_id).await?;
    let quiz = QuizRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Quiz", id))?;
    Ok(Json(quiz))
}

/// DELETE /api/v1/quizzes/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    quiz_for_manager(&state.pool, &user, id).await?;
    QuizRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
