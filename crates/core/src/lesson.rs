//! Lesson content types.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const LESSON_VIDEO: &str = "video";
pub const LESSON_PDF: &str = "pdf";
pub const LESSON_TEXT: &str = "text";
pub const LESSON_QUIZ: &str = "quiz";
pub const LESSON_ASSIGNMENT: &str = "assignment";

/// All valid lesson type strings (mirrors `ck_lessons_lesson_type`).
pub const VALID_LESSON_TYPES: &[&str] = &[
    LESSON_VIDEO,
    LESSON_PDF,
    LESSON_TEXT,
    LESSON_QUIZ,
    LESSON_ASSIGNMENT,
];

/// How a lesson's content is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonType {
    Video,
    Pdf,
    Text,
    Quiz,
    Assignment,
}

impl LessonType {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            LESSON_VIDEO => Ok(Self::Video),
            LESSON_PDF => Ok(Self::Pdf),
            LESSON_TEXT => Ok(Self::Text),
            LESSON_QUIZ => Ok(Self::Quiz),
            LESSON_ASSIGNMENT => Ok(Self::Assignment),
            _ => Err(CoreError::Validation(format!(
                "Unknown lesson type '{s}'. Valid: {VALID_LESSON_TYPES:?}"
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => LESSON_VIDEO,
            Self::Pdf => LESSON_PDF,
            Self::Text => LESSON_TEXT,
            Self::Quiz => LESSON_QUIZ,
            Self::Assignment => LESSON_ASSIGNMENT,
        }
    }

    /// Video and PDF lessons point at an externally hosted asset.
    pub fn requires_content_url(&self) -> bool {
        matches!(self, Self::Video | Self::Pdf)
    }
}

/// Validate a lesson type string and its content URL requirement.
pub fn validate_lesson_content(
    lesson_type: &str,
    content_url: Option<&str>,
) -> Result<LessonType, CoreError> {
    let parsed = LessonType::from_str_value(lesson_type)?;
    let has_url = content_url.is_some_and(|u| !u.trim().is_empty());
    if parsed.requires_content_url() && !has_url {
        return Err(CoreError::Validation(format!(
            "Lessons of type '{lesson_type}' require a content_url"
        )));
    }
    Ok(parsed)
}
