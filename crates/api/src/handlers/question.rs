//! Handlers for quiz questions and their answer options.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::question::{validate_question, OptionDraft};
use lms_core::types::DbId;
use lms_db::models::question::{
    CreateQuestion, CreateQuestionOption, QuestionWithOptions, UpdateQuestion,
};
use lms_db::repositories::QuestionRepo;
use sqlx::PgPool;
use validator::Validate;

use super::quiz_for_manager;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn drafts(options: &[CreateQuestionOption]) -> Vec<OptionDraft<'_>> {
    options
        .iter()
        .map(|o| OptionDraft {
            text: &o.option_text,
            is_correct: o.is_correct,
        })
        .collect()
}

/// Load a question and require the caller to manage its quiz's course.
async fn question_for_manager(
    pool: &PgPool,
    user: &AuthUser,
    id: DbId,
) -> AppResult<QuestionWithOptions> {
    let question = QuestionRepo::find_with_options(pool, id)
        .await?
        .ok_or(CoreError::not_found("Question", id))?;
    quiz_for_manager(pool, user, question.question.quiz_id).await?;
    Ok(question)
}

/// POST /api/v1/quizzes/{quiz_id}/questions
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(quiz_id): Path<DbId>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<(StatusCode, Json<QuestionWithOptions>)> {
    input.validate()?;
    validate_question(
        &input.question_type,
        input.answer.as_deref(),
        &drafts(&input.options),
    )?;
    quiz_for_manager(&state.pool, &user, quiz_id).await?;
    let question = QuestionRepo::create(&state.pool, quiz_id, &input).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// PUT /api/v1/questions/{id}
///
/// The merged result (stored values overlaid with the supplied ones) must
/// still be a valid question.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuestion>,
) -> AppResult<Json<QuestionWithOptions>> {
    input.validate()?;
    let existing = question_for_manager(&state.pool, &user, id).await?;

    let question_type = input
        .question_type
        .as_deref()
        .unwrap_or(&existing.question.question_type);
    let answer = input
        .answer
        .as_deref()
        .or(existing.question.answer.as_deref());
    let options = match &input.options {
        Some(options) => drafts(options),
        None => existing
            .options
            .iter()
            .map(|o| OptionDraft {
                text: &o.option_text,
                is_correct: o.is_correct,
            })
            .collect(),
    };
    validate_question(question_type, answer, &options)?;

    let question = QuestionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Question", id))?;
    Ok(Json(question))
}

/// DELETE /api/v1/questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    question_for_manager(&state.pool, &user, id).await?;
    QuestionRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
