//! Account passwords: Argon2id hashes in PHC format plus the registration
//! policy.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use lms_core::error::CoreError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// `Ok(false)` on a mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Registration policy: length bounds in characters, and the password may
/// not be the username.
pub fn check_password_policy(password: &str, username: &str) -> Result<(), CoreError> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Password must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH} characters"
        )));
    }
    if password.eq_ignore_ascii_case(username) {
        return Err(CoreError::Validation(
            "Password must differ from the username".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn hash_verifies_only_the_original() {
        let hash = hash_password("correct-horse").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct-horse", &hash).unwrap());
        assert!(!verify_password("wrong-horse", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn policy_length_bounds() {
        assert!(check_password_policy("1234567", "ada").is_err());
        assert!(check_password_policy("12345678", "ada").is_ok());
        assert!(check_password_policy(&"x".repeat(MAX_PASSWORD_LENGTH + 1), "ada").is_err());
    }

    #[test]
    fn policy_counts_characters_not_bytes() {
        // 8 characters, 16 bytes.
        assert!(check_password_policy("éééééééé", "ada").is_ok());
    }

    #[test]
    fn policy_rejects_username_as_password() {
        assert_matches!(
            check_password_policy("LongUsername", "longusername"),
            Err(CoreError::Validation(_))
        );
    }
}
