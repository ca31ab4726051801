//! Well-known role name constants.
//!
//! These must match the `ck_users_role` check constraint in
//! `20260101000001_create_users.sql`.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_INSTRUCTOR: &str = "instructor";
pub const ROLE_STUDENT: &str = "student";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_INSTRUCTOR, ROLE_STUDENT];

/// Roles a user may pick for themselves at registration. Admins are seeded.
pub const SELF_ASSIGNABLE_ROLES: &[&str] = &[ROLE_INSTRUCTOR, ROLE_STUDENT];

/// Validate that a role name is one of [`VALID_ROLES`].
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown role '{role}'. Valid: {VALID_ROLES:?}"
        )))
    }
}

/// Instructors and admins may create courses; students only consume them.
pub fn can_author_courses(role: &str) -> bool {
    role == ROLE_INSTRUCTOR || role == ROLE_ADMIN
}

/// Validate a role requested during self-registration.
pub fn validate_self_assignable_role(role: &str) -> Result<(), CoreError> {
    validate_role(role)?;
    if SELF_ASSIGNABLE_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Role '{role}' cannot be self-assigned"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_staff_author_courses() {
        assert!(can_author_courses(ROLE_INSTRUCTOR));
        assert!(can_author_courses(ROLE_ADMIN));
        assert!(!can_author_courses(ROLE_STUDENT));
        assert!(!can_author_courses("guest"));
    }

    #[test]
    fn validate_role_valid() {
        for role in VALID_ROLES {
            assert!(validate_role(role).is_ok());
        }
    }

    #[test]
    fn validate_role_invalid() {
        assert!(validate_role("superuser").is_err());
        assert!(validate_role("").is_err());
    }

    #[test]
    fn admin_is_not_self_assignable() {
        assert!(matches!(
            validate_self_assignable_role(ROLE_ADMIN),
            Err(CoreError::Forbidden(_))
        ));
        assert!(validate_self_assignable_role(ROLE_STUDENT).is_ok());
        assert!(validate_self_assignable_role(ROLE_INSTRUCTOR).is_ok());
    }
}
