//! Quiz attempt submission and history.
//!
//! Submitting an attempt grades it, stores it, and then runs the completion
//! cascade for the submitter within the same request.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lms_core::access::ensure_can_attempt;
use lms_core::grading::{grade_attempt, GradableQuestion, QuestionFeedback, SubmittedAnswer};
use lms_core::types::DbId;
use lms_db::models::question::QuestionWithOptions;
use lms_db::models::quiz_attempt::{CreateQuizAttempt, QuizAttempt};
use lms_db::repositories::{EnrollmentRepo, QuestionRepo, QuizAttemptRepo};
use serde::{Deserialize, Serialize};

use super::{find_course, find_quiz};
use crate::engine::cascade::{recompute_completion, CompletionUpdate};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /quizzes/{quiz_id}/attempts`.
#[derive(Debug, Deserialize)]
pub struct SubmitAttempt {
    pub answers: Vec<SubmittedAnswer>,
}

/// Graded attempt as returned to the submitter.
#[derive(Debug, Serialize)]
pub struct AttemptResult {
    pub attempt: QuizAttempt,
    pub correct_count: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub passed: bool,
    /// Empty when the percentage falls outside every band.
    pub band: &'static str,
    pub feedback: Vec<QuestionFeedback>,
    pub completion: CompletionUpdate,
}

/// POST /api/v1/quizzes/{quiz_id}/attempts
pub async fn submit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(quiz_id): Path<DbId>,
    Json(input): Json<SubmitAttempt>,
) -> AppResult<(StatusCode, Json<DataResponse<AttemptResult>>)> {
    let quiz = find_quiz(&state.pool, quiz_id).await?;
    let course = find_course(&state.pool, quiz.course_id).await?;

    let enrolled = EnrollmentRepo::exists(&state.pool, user.user_id, course.id).await?;
    ensure_can_attempt(user.actor(), course.instructor_id, enrolled)?;

    let questions = QuestionRepo::list_with_options_by_quiz(&state.pool, quiz_id).await?;
    let gradable = questions
        .iter()
        .map(QuestionWithOptions::to_gradable)
        .collect::<Result<Vec<GradableQuestion>, _>>()?;

    let outcome = grade_attempt(&gradable, &input.answers);

    let attempt = QuizAttemptRepo::create(
        &state.pool,
        &CreateQuizAttempt {
            user_id: user.user_id,
            quiz_id,
            answers: input.answers,
            score: outcome.score,
            passed: outcome.passed,
        },
    )
    .await?;

    tracing::info!(
        attempt_id = attempt.id,
        quiz_id,
        user_id = user.user_id,
        correct = outcome.correct_count,
        total = outcome.total_questions,
        score = outcome.score,
        passed = outcome.passed,
        "Quiz attempt graded",
    );

    let completion =
        recompute_completion(&state.pool, &state.config, user.user_id, course.id).await?;

    let band = outcome.band_label();
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AttemptResult {
                attempt,
                correct_count: outcome.correct_count,
                total_questions: outcome.total_questions,
                percentage: outcome.percentage,
                passed: outcome.passed,
                band,
                feedback: outcome.feedback,
                completion,
            },
        }),
    ))
}

/// GET /api/v1/quizzes/{quiz_id}/attempts
///
/// The caller's own attempts, newest first. Course managers see everyone's.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(quiz_id): Path<DbId>,
) -> AppResult<Json<Vec<QuizAttempt>>> {
    let quiz = find_quiz(&state.pool, quiz_id).await?;
    let course = find_course(&state.pool, quiz.course_id).await?;

    let attempts = if user.actor().manages(course.instructor_id) {
        QuizAttemptRepo::list_by_quiz(&state.pool, quiz_id).await?
    } else {
        QuizAttemptRepo::list_by_user_and_quiz(&state.pool, user.user_id, quiz_id).await?
    };
    Ok(Json(attempts))
}
