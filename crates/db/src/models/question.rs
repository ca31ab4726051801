//! Question and answer-option models and DTOs.
//!
//! Managers see [`QuestionWithOptions`], which includes the answer key and
//! the `is_correct` flags. Everyone else gets the redacted
//! [`PublicQuestion`].

use lms_core::grading::GradableQuestion;
use lms_core::question::QuestionType;
use lms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub quiz_id: DbId,
    pub question_text: String,
    pub question_type: String,
    pub answer: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `question_options` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestionOption {
    pub id: DbId,
    pub question_id: DbId,
    pub option_text: String,
    pub is_correct: bool,
    pub sort_order: i32,
}

/// A question with its options, including answer-key data.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithOptions {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<QuestionOption>,
}

impl QuestionWithOptions {
    /// The string a submission must equal to be marked correct.
    ///
    /// Uses the stored `answer` when present; otherwise, for multiple choice,
    /// the text of the first option flagged correct.
    pub fn answer_key(&self) -> Option<String> {
        if let Some(answer) = &self.question.answer {
            return Some(answer.clone());
        }
        self.options
            .iter()
            .find(|o| o.is_correct)
            .map(|o| o.option_text.clone())
    }

    /// Convert into the grader's input. Fails on an unknown stored type.
    pub fn to_gradable(&self) -> Result<GradableQuestion, lms_core::error::CoreError> {
        Ok(GradableQuestion {
            id: self.question.id,
            question_type: QuestionType::from_str_value(&self.question.question_type)?,
            answer_key: self.answer_key(),
        })
    }

    /// Strip answer-key data for students.
    pub fn redacted(&self) -> PublicQuestion {
        PublicQuestion {
            id: self.question.id,
            quiz_id: self.question.quiz_id,
            question_text: self.question.question_text.clone(),
            question_type: self.question.question_type.clone(),
            sort_order: self.question.sort_order,
            options: self
                .options
                .iter()
                .map(|o| PublicOption {
                    id: o.id,
                    option_text: o.option_text.clone(),
                })
                .collect(),
        }
    }
}

/// Student-facing question (no answer, no correctness flags).
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: DbId,
    pub quiz_id: DbId,
    pub question_text: String,
    pub question_type: String,
    pub sort_order: i32,
    pub options: Vec<PublicOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicOption {
    pub id: DbId,
    pub option_text: String,
}

/// One option in a create/update question request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionOption {
    #[validate(length(min = 1, max = 500))]
    pub option_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// DTO for creating a question with its options. The quiz comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, max = 2000))]
    pub question_text: String,
    pub question_type: String,
    pub answer: Option<String>,
    pub sort_order: Option<i32>,
    #[serde(default)]
    #[validate(nested)]
    pub options: Vec<CreateQuestionOption>,
}

/// DTO for updating a question. When `options` is present the existing
/// options are replaced wholesale.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuestion {
    #[validate(length(min = 1, max = 2000))]
    pub question_text: Option<String>,
    pub question_type: Option<String>,
    pub answer: Option<String>,
    pub sort_order: Option<i32>,
    #[validate(nested)]
    pub options: Option<Vec<CreateQuestionOption>>,
}
