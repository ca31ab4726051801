//! Quiz attempt grading.
//!
//! Grading is a single pass over the quiz's questions: each submitted answer
//! is looked up by question id and compared for exact string equality with
//! the stored answer key. Only multiple-choice and true/false questions are
//! auto-graded; short-answer questions never count as correct.
//!
//! The percentage drives two things: the pass flag (inclusive 40% boundary)
//! and a descriptive [`ResultBand`]. The bands do not cover the whole range.
//! Percentages in `[45, 50)` and `[60, 70)` have no band and render as an
//! empty label; callers get `None` from [`result_band`] for those.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::question::QuestionType;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum percentage (inclusive) for an attempt to pass.
pub const PASS_THRESHOLD_PCT: f64 = 40.0;

pub const BAND_FAIL: &str = "fail";
pub const BAND_PASS: &str = "pass";
pub const BAND_NEEDS_IMPROVEMENT: &str = "needs improvement";
pub const BAND_SATISFACTORY: &str = "satisfactory";
pub const BAND_EXCELLENT: &str = "excellent";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A question as the grader sees it.
///
/// `answer_key` is resolved by the caller: the question's stored answer, or
/// for multiple choice without one, the text of the option flagged correct.
#[derive(Debug, Clone)]
pub struct GradableQuestion {
    pub id: DbId,
    pub question_type: QuestionType,
    pub answer_key: Option<String>,
}

/// One `{questionId, answer}` pair from a submission. The id is also
/// accepted as `question_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmittedAnswer {
    #[serde(alias = "questionId")]
    pub question_id: DbId,
    pub answer: String,
}

/// Per-question outcome returned to the student.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuestionFeedback {
    pub question_id: DbId,
    pub submitted_answer: Option<String>,
    pub is_correct: bool,
    /// Expected answer for auto-graded questions; `None` for short answer.
    pub correct_answer: Option<String>,
    pub auto_graded: bool,
}

/// Coarse descriptive bucket for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultBand {
    Fail,
    Pass,
    NeedsImprovement,
    Satisfactory,
    Excellent,
}

impl ResultBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fail => BAND_FAIL,
            Self::Pass => BAND_PASS,
            Self::NeedsImprovement => BAND_NEEDS_IMPROVEMENT,
            Self::Satisfactory => BAND_SATISFACTORY,
            Self::Excellent => BAND_EXCELLENT,
        }
    }
}

/// The full result of grading one submission.
#[derive(Debug, Clone, Serialize)]
pub struct GradeOutcome {
    pub correct_count: usize,
    pub total_questions: usize,
    /// Unrounded percentage in `[0, 100]`.
    pub percentage: f64,
    /// `percentage` rounded to the nearest integer; this is what gets stored.
    pub score: i32,
    pub passed: bool,
    pub band: Option<ResultBand>,
    pub feedback: Vec<QuestionFeedback>,
}

impl GradeOutcome {
    /// Band label, or the empty string for percentages no band covers.
    pub fn band_label(&self) -> &'static str {
        band_label(self.band)
    }
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

/// Grade `answers` against every question of a quiz.
///
/// If the same question id is submitted more than once the first answer is
/// used. Answers for question ids outside the quiz are ignored. A quiz with
/// no questions grades as 0% and does not pass.
pub fn grade_attempt(questions: &[GradableQuestion], answers: &[SubmittedAnswer]) -> GradeOutcome {
    let mut submitted: HashMap<DbId, &str> = HashMap::with_capacity(answers.len());
    for a in answers {
        submitted.entry(a.question_id).or_insert(a.answer.as_str());
    }

    let mut correct_count = 0usize;
    let feedback: Vec<QuestionFeedback> = questions
        .iter()
        .map(|q| {
            let given = submitted.get(&q.id).copied();
            let auto_graded = q.question_type.is_auto_graded();
            let is_correct = auto_graded
                && matches!((given, q.answer_key.as_deref()), (Some(g), Some(k)) if g == k);
            if is_correct {
                correct_count += 1;
            }
            QuestionFeedback {
                question_id: q.id,
                submitted_answer: given.map(str::to_owned),
                is_correct,
                correct_answer: if auto_graded { q.answer_key.clone() } else { None },
                auto_graded,
            }
        })
        .collect();

    let total_questions = questions.len();
    let percentage = percentage_of(correct_count, total_questions);

    GradeOutcome {
        correct_count,
        total_questions,
        percentage,
        score: percentage.round() as i32,
        passed: total_questions > 0 && percentage >= PASS_THRESHOLD_PCT,
        band: result_band(percentage),
        feedback,
    }
}

/// `correct / total * 100`, or 0 when `total` is 0.
///
/// Multiplies before dividing so exact boundaries such as 2/5 land on 40.0.
pub fn percentage_of(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (correct as f64 * 100.0) / total as f64
}

/// Map a percentage onto its descriptive band.
///
/// | Range         | Band              |
/// |---------------|-------------------|
/// | `< 40`        | fail              |
/// | `[40, 45)`    | pass              |
/// | `[50, 60)`    | needs improvement |
/// | `[70, 80)`    | satisfactory      |
/// | `>= 80`       | excellent         |
///
/// Anything else has no band.
pub fn result_band(percentage: f64) -> Option<ResultBand> {
    match percentage {
        p if p < 40.0 => Some(ResultBand::Fail),
        p if p < 45.0 => Some(ResultBand::Pass),
        p if (50.0..60.0).contains(&p) => Some(ResultBand::NeedsImprovement),
        p if (70.0..80.0).contains(&p) => Some(ResultBand::Satisfactory),
        p if p >= 80.0 => Some(ResultBand::Excellent),
        _ => None,
    }
}

/// Label for an optional band; the empty string when there is none.
pub fn band_label(band: Option<ResultBand>) -> &'static str {
    band.map_or("", |b| b.label())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
