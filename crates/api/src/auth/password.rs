//! Argon2id password hashing, verification, and the registration password policy.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself.

use std::sync::LazyLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use gardenspace_core::validation::invalid;
use regex::Regex;
use validator::ValidationError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static UPPERCASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static LOWERCASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static SPECIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[!@#$%^&*(),.?":{}|<>+=\[\]\\/;'`~]"#).expect("valid regex")
});
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \-_]").expect("valid regex"));
static CYRILLIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[а-яА-ЯёЁ]").expect("valid regex"));

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// A hash that cannot be parsed never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Hash checked when the account is unknown, so a miss costs one Argon2 run.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("unknown-account-placeholder").ok());

/// Verify a password against an account hash that may not exist.
///
/// With no stored hash the password is still checked against a dummy hash
/// and the result is always `false`, keeping unknown usernames and wrong
/// passwords indistinguishable by response time.
pub fn verify_password_or_dummy(password: &str, hash: Option<&str>) -> bool {
    match hash {
        Some(hash) => verify_password(password, hash),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                verify_password(password, dummy);
            }
            false
        }
    }
}

/// Check a new password against the registration policy.
///
/// Rules are checked in order and the first failure is reported.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(invalid(
            "password_length",
            "must be at least 6 characters long",
        ));
    }
    if !UPPERCASE_RE.is_match(password) {
        return Err(invalid(
            "password_uppercase",
            "must contain an uppercase Latin letter",
        ));
    }
    if !LOWERCASE_RE.is_match(password) {
        return Err(invalid(
            "password_lowercase",
            "must contain a lowercase Latin letter",
        ));
    }
    if !DIGIT_RE.is_match(password) {
        return Err(invalid("password_digit", "must contain a digit"));
    }
    if !SPECIAL_RE.is_match(password) {
        return Err(invalid(
            "password_special",
            "must contain a special character",
        ));
    }
    if !SEPARATOR_RE.is_match(password) {
        return Err(invalid(
            "password_separator",
            "must contain a space, hyphen or underscore",
        ));
    }
    if CYRILLIC_RE.is_match(password) {
        return Err(invalid(
            "password_cyrillic",
            "must not contain Cyrillic letters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_rule(password: &str) -> String {
        validate_password_strength(password)
            .expect_err("password should be rejected")
            .code
            .to_string()
    }

    #[test]
    fn test_hash_and_verify() {
        let password = "Correct-horse1!";
        let hash = hash_password(password).expect("hashing should succeed");

        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );
        assert!(verify_password(password, &hash));
    }

    #[test]
    fn test_same_password_hashes_differ() {
        let a = hash_password("Same_pass1!").unwrap();
        let b = hash_password("Same_pass1!").unwrap();
        assert_ne!(a, b, "salts should differ between calls");
        assert!(verify_password("Same_pass1!", &a));
        assert!(verify_password("Same_pass1!", &b));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("Real_password1!").expect("hashing should succeed");
        assert!(!verify_password("Wrong_password1!", &hash));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_missing_account_hash_never_matches() {
        let hash = hash_password("Real_password1!").expect("hashing should succeed");
        assert!(verify_password_or_dummy("Real_password1!", Some(&hash)));
        assert!(!verify_password_or_dummy("Wrong_password1!", Some(&hash)));
        assert!(!verify_password_or_dummy("Real_password1!", None));
        assert!(!verify_password_or_dummy("unknown-account-placeholder", None));
        assert!(DUMMY_HASH.as_deref().is_some_and(|h| h.starts_with("$argon2id$")));
    }

    #[test]
    fn test_policy_accepts_strong_password() {
        assert!(validate_password_strength("Garden_2024!").is_ok());
        assert!(validate_password_strength("Ab1! x").is_ok());
    }

    #[test]
    fn test_policy_reports_first_failed_rule() {
        assert_eq!(failed_rule("Ab1!_"), "password_length");
        assert_eq!(failed_rule("garden_2024!"), "password_uppercase");
        assert_eq!(failed_rule("GARDEN_2024!"), "password_lowercase");
        assert_eq!(failed_rule("Garden_two!"), "password_digit");
        assert_eq!(failed_rule("Garden_2024"), "password_special");
        assert_eq!(failed_rule("Garden2024!"), "password_separator");
        assert_eq!(failed_rule("Garden_2024!сад"), "password_cyrillic");
    }
}
