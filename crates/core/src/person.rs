//! Registration vocabularies: gender, blood group and Rh factor.
//!
//! Stored as text; the values must match the `CHECK` constraints on the
//! `users` table.

use validator::ValidationError;

use crate::validation::invalid;

pub const GENDER_MALE: &str = "Мужской";
pub const GENDER_FEMALE: &str = "Женский";
pub const GENDERS: &[&str] = &[GENDER_MALE, GENDER_FEMALE];

pub const BLOOD_GROUPS: &[&str] = &["1", "2", "3", "4"];

pub const RH_POSITIVE: &str = "+";
pub const RH_NEGATIVE: &str = "-";
pub const RH_FACTORS: &[&str] = &[RH_POSITIVE, RH_NEGATIVE];

fn one_of(code: &'static str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(invalid(
        code,
        format!("invalid value '{value}', must be one of: {}", allowed.join(", ")),
    ))
}

pub fn validate_gender(value: &str) -> Result<(), ValidationError> {
    one_of("gender", value, GENDERS)
}

pub fn validate_blood_group(value: &str) -> Result<(), ValidationError> {
    one_of("blood_group", value, BLOOD_GROUPS)
}

pub fn validate_rh_factor(value: &str) -> Result<(), ValidationError> {
    one_of("rh_factor", value, RH_FACTORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_accept_known_values() {
        assert!(validate_gender(GENDER_FEMALE).is_ok());
        assert!(validate_blood_group("4").is_ok());
        assert!(validate_rh_factor("-").is_ok());
    }

    #[test]
    fn vocabularies_reject_unknown_values() {
        assert!(validate_gender("other").is_err());
        assert!(validate_blood_group("0").is_err());
        assert!(validate_blood_group("5").is_err());
        assert!(validate_rh_factor("positive").is_err());
    }
}
