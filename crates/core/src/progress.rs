//! Progress arithmetic: lesson completion percentage and the quiz-driven
//! module/course completion cascade.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::DbId;

/// `round(completed / total * 100)`, or 0 when the course has no lessons.
///
/// The result is clamped to `[0, 100]` so stale progress rows for lessons
/// that were since deleted can never push it past 100.
pub fn completion_percentage(completed: i64, total: i64) -> i32 {
    if total <= 0 {
        return 0;
    }
    let pct = (completed.max(0) as f64 * 100.0) / total as f64;
    (pct.round() as i32).clamp(0, 100)
}

/// Derived completion flag for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleCompletion {
    pub module_id: DbId,
    pub is_completed: bool,
}

/// Result of re-deriving completion after a quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeOutcome {
    pub modules: Vec<ModuleCompletion>,
    pub course_complete: bool,
}

/// Re-derive module and course completion for one user.
///
/// `course_quiz_ids` are all quizzes of the course and `passed_quiz_ids`
/// those the user has at least one passing attempt on. A module counts as
/// complete when every quiz of its course is passed; membership is by
/// course, not by a module-to-quiz association, so every module of the
/// course receives the same flag. The course is complete when every module
/// is complete.
///
/// Both checks are universal quantifiers: a course with no quizzes marks
/// every module complete, and a course with no modules is complete no
/// matter how its quizzes went.
pub fn evaluate_cascade(
    course_quiz_ids: &[DbId],
    passed_quiz_ids: &HashSet<DbId>,
    module_ids: &[DbId],
) -> CascadeOutcome {
    let all_passed = course_quiz_ids
        .iter()
        .all(|id| passed_quiz_ids.contains(id));

    let modules: Vec<ModuleCompletion> = module_ids
        .iter()
        .map(|&module_id| ModuleCompletion {
            module_id,
            is_completed: all_passed,
        })
        .collect();

    let course_complete = course_is_complete(&modules);

    CascadeOutcome {
        modules,
        course_complete,
    }
}

/// A course is complete when every one of its modules is complete.
pub fn course_is_complete(modules: &[ModuleCompletion]) -> bool {
    modules.iter().all(|m| m.is_completed)
}
