//! Quiz question types and answer-key validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const QUESTION_MULTIPLE_CHOICE: &str = "multiple_choice";
pub const QUESTION_TRUE_FALSE: &str = "true_false";
pub const QUESTION_SHORT_ANSWER: &str = "short_answer";

/// All valid question type strings (mirrors `ck_questions_question_type`).
pub const VALID_QUESTION_TYPES: &[&str] = &[
    QUESTION_MULTIPLE_CHOICE,
    QUESTION_TRUE_FALSE,
    QUESTION_SHORT_ANSWER,
];

/// Accepted answer keys for true/false questions.
pub const TRUE_FALSE_ANSWERS: &[&str] = &["true", "false"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl QuestionType {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            QUESTION_MULTIPLE_CHOICE => Ok(Self::MultipleChoice),
            QUESTION_TRUE_FALSE => Ok(Self::TrueFalse),
            QUESTION_SHORT_ANSWER => Ok(Self::ShortAnswer),
            _ => Err(CoreError::Validation(format!(
                "Unknown question type '{s}'. Valid: {VALID_QUESTION_TYPES:?}"
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => QUESTION_MULTIPLE_CHOICE,
            Self::TrueFalse => QUESTION_TRUE_FALSE,
            Self::ShortAnswer => QUESTION_SHORT_ANSWER,
        }
    }

    /// Only closed-form questions are graded automatically.
    pub fn is_auto_graded(&self) -> bool {
        matches!(self, Self::MultipleChoice | Self::TrueFalse)
    }
}

/// One answer option as supplied when authoring a question.
#[derive(Debug, Clone)]
pub struct OptionDraft<'a> {
    pub text: &'a str,
    pub is_correct: bool,
}

/// Validate a question's type, answer key and options together.
///
/// - multiple choice needs at least two options and either an answer key
///   matching one option or exactly one option flagged correct
/// - true/false needs an answer key of `"true"` or `"false"` and no options
/// - short answer takes no options; its answer key is informational only
pub fn validate_question(
    question_type: &str,
    answer: Option<&str>,
    options: &[OptionDraft<'_>],
) -> Result<QuestionType, CoreError> {
    let parsed = QuestionType::from_str_value(question_type)?;
    match parsed {
        QuestionType::MultipleChoice => {
            if options.len() < 2 {
                return Err(CoreError::Validation(
                    "Multiple choice questions need at least two options".into(),
                ));
            }
            let flagged = options.iter().filter(|o| o.is_correct).count();
            match answer {
                Some(key) => {
                    if !options.iter().any(|o| o.text == key) {
                        return Err(CoreError::Validation(format!(
                            "Answer '{key}' does not match any option"
                        )));
                    }
                }
                None if flagged != 1 => {
                    return Err(CoreError::Validation(
                        "Exactly one option must be marked correct when no answer is given"
                            .into(),
                    ));
                }
                None => {}
            }
        }
        QuestionType::TrueFalse => {
            if !options.is_empty() {
                return Err(CoreError::Validation(
                    "True/false questions do not take options".into(),
                ));
            }
            match answer {
                Some(key) if TRUE_FALSE_ANSWERS.contains(&key) => {}
                _ => {
                    return Err(CoreError::Validation(
                        "True/false questions need an answer of 'true' or 'false'".into(),
                    ))
                }
            }
        }
        QuestionType::ShortAnswer => {
            if !options.is_empty() {
                return Err(CoreError::Validation(
                    "Short answer questions do not take options".into(),
                ));
            }
        }
    }
    Ok(parsed)
}
