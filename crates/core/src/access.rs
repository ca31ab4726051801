//! Ownership and enrollment checks.
//!
//! Every mutation of a course's modules, lessons, quizzes and questions is
//! gated by [`ensure_course_manager`]. Callers load the course first so a
//! missing course surfaces as not-found before any access decision is made.

use crate::error::CoreError;
use crate::roles::{ROLE_ADMIN, ROLE_INSTRUCTOR, ROLE_STUDENT};
use crate::types::DbId;

/// Who is asking, as far as access decisions are concerned.
#[derive(Debug, Clone, Copy)]
pub struct Actor<'a> {
    pub user_id: DbId,
    pub role: &'a str,
}

impl<'a> Actor<'a> {
    pub fn new(user_id: DbId, role: &'a str) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Whether this actor is the course's instructor or an admin.
    pub fn manages(&self, instructor_id: DbId) -> bool {
        self.is_admin() || (self.role == ROLE_INSTRUCTOR && self.user_id == instructor_id)
    }
}

/// Only the course's instructor or an admin may mutate course content.
pub fn ensure_course_manager(actor: Actor<'_>, instructor_id: DbId) -> Result<(), CoreError> {
    if actor.manages(instructor_id) {
        Ok(())
    } else {
        Err(CoreError::forbidden(
            "Only the course instructor or an admin may modify this course",
        ))
    }
}

/// A quiz may be attempted by an enrolled student, the owning instructor,
/// or an admin.
pub fn ensure_can_attempt(
    actor: Actor<'_>,
    instructor_id: DbId,
    is_enrolled: bool,
) -> Result<(), CoreError> {
    if actor.manages(instructor_id) || (actor.role == ROLE_STUDENT && is_enrolled) {
        Ok(())
    } else {
        Err(CoreError::forbidden(
            "You must be enrolled in this course to attempt its quizzes",
        ))
    }
}

/// A user's own record, or anything if the actor manages the course.
pub fn ensure_self_or_manager(
    actor: Actor<'_>,
    owner_id: DbId,
    instructor_id: DbId,
) -> Result<(), CoreError> {
    if actor.user_id == owner_id || actor.manages(instructor_id) {
        Ok(())
    } else {
        Err(CoreError::forbidden("You do not have access to this record"))
    }
}
