//! Field validators for typed input
//!
//! Each validator requires a value and is used as-is when adding a student.
//! When updating one, wrap it in `optional`: there a blank answer means
//! "keep the current value" and comes back as `Ok(None)`.

use crate::consts::{MAX_SCORE, MIN_NAME_WORDS, MIN_SCORE};
use crate::error::ValidationError;
use crate::record::Gender;

/// Blank input is `None`, anything else goes through `validate`
pub fn optional<T, F>(input: &str, validate: F) -> Result<Option<T>, ValidationError>
where
    F: Fn(&str) -> Result<T, ValidationError>,
{
    if input.trim().is_empty() {
        Ok(None)
    } else {
        validate(input).map(Some)
    }
}

/// Full name: at least a first and a last name
pub fn name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if trimmed.split_whitespace().count() < MIN_NAME_WORDS {
        return Err(ValidationError::IncompleteName);
    }
    Ok(trimmed.to_string())
}

pub fn gender(input: &str) -> Result<Gender, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    Gender::from_str(trimmed).ok_or(ValidationError::InvalidGender)
}

/// Subject score: digits only, within [MIN_SCORE, MAX_SCORE]
pub fn score(input: &str) -> Result<u8, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber);
    }
    let out_of_range = ValidationError::OutOfRange {
        min: MIN_SCORE,
        max: MAX_SCORE,
    };
    // Digit strings too long for u32 are out of range, not malformed
    let value: u32 = trimmed.parse().map_err(|_| out_of_range.clone())?;
    match u8::try_from(value) {
        Ok(v) if (MIN_SCORE..=MAX_SCORE).contains(&v) => Ok(v),
        _ => Err(out_of_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_requires_two_words() {
        assert_eq!(name("Jane Doe"), Ok("Jane Doe".to_string()));
        assert_eq!(name("  Mary Ann Smith "), Ok("Mary Ann Smith".to_string()));
        assert_eq!(name("Jane"), Err(ValidationError::IncompleteName));
        assert_eq!(name("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_blank_allowed_on_update() {
        assert_eq!(optional("", name), Ok(None));
        assert_eq!(optional("  ", gender), Ok(None));
        assert_eq!(optional("", score), Ok(None));
        assert_eq!(optional(" 42", score), Ok(Some(42)));
        // Non-blank input is still validated
        assert_eq!(optional("Jane", name), Err(ValidationError::IncompleteName));
    }

    #[test]
    fn test_gender_case_insensitive() {
        assert_eq!(gender("MALE"), Ok(Gender::Male));
        assert_eq!(gender("Female"), Ok(Gender::Female));
        assert_eq!(gender("other"), Err(ValidationError::InvalidGender));
        assert_eq!(gender(""), Err(ValidationError::Required));
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(score("0"), Ok(0));
        assert_eq!(score("100"), Ok(100));
        assert_eq!(score(" 85 "), Ok(85));
        assert!(matches!(score("101"), Err(ValidationError::OutOfRange { .. })));
        assert!(matches!(
            score("99999999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_score_rejects_non_digits() {
        assert_eq!(score("-5"), Err(ValidationError::NotANumber));
        assert_eq!(score("8.5"), Err(ValidationError::NotANumber));
        assert_eq!(score("ninety"), Err(ValidationError::NotANumber));
        assert_eq!(score(""), Err(ValidationError::Required));
    }
}
