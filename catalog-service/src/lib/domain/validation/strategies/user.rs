use super::char_len;
use super::expect_integer;
use super::expect_text;
use super::is_blank;
use crate::domain::registry::KeyedStrategy;
use crate::domain::validation::errors::ValidationError;
use crate::domain::validation::models::FieldValue;
use crate::domain::validation::models::ValidationFieldKind;
use crate::domain::validation::ports::FieldValidationStrategy;

/// Nickname: 3-50 characters of letters, digits, underscore and hyphen.
#[derive(Debug, Clone, Copy, Default)]
pub struct NicknameValidation;

impl NicknameValidation {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 50;
}

impl KeyedStrategy for NicknameValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::Nickname
    }
}

impl FieldValidationStrategy for NicknameValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let nickname = expect_text(
            value,
            ValidationFieldKind::Nickname,
            "Nickname cannot be empty",
        )?;

        if is_blank(nickname) {
            return Err(ValidationError::rejected("Nickname cannot be empty"));
        }
        let length = char_len(nickname);
        if length < Self::MIN_LENGTH {
            return Err(ValidationError::rejected(format!(
                "Nickname must be at least {} characters long",
                Self::MIN_LENGTH
            )));
        }
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::rejected(format!(
                "Nickname cannot be longer than {} characters",
                Self::MAX_LENGTH
            )));
        }
        if !nickname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::rejected(
                "Nickname can only contain letters, numbers, underscores, and hyphens",
            ));
        }

        Ok(())
    }
}

/// Password: 8-100 characters, not blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordValidation;

impl PasswordValidation {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 100;
}

impl KeyedStrategy for PasswordValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::Password
    }
}

impl FieldValidationStrategy for PasswordValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let password = expect_text(
            value,
            ValidationFieldKind::Password,
            "Password cannot be empty",
        )?;

        if is_blank(password) {
            return Err(ValidationError::rejected("Password cannot be empty"));
        }
        let length = char_len(password);
        if length < Self::MIN_LENGTH {
            return Err(ValidationError::rejected(format!(
                "Password must be at least {} characters long",
                Self::MIN_LENGTH
            )));
        }
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::rejected(format!(
                "Password cannot be longer than {} characters",
                Self::MAX_LENGTH
            )));
        }

        Ok(())
    }
}

/// Age: between 1 and 149 inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeValidation;

impl AgeValidation {
    const MIN_AGE: i64 = 1;
    const MAX_AGE: i64 = 149;
}

impl KeyedStrategy for AgeValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::Age
    }
}

impl FieldValidationStrategy for AgeValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let age = expect_integer(value, ValidationFieldKind::Age, "Age cannot be null")?;

        if !(Self::MIN_AGE..=Self::MAX_AGE).contains(&age) {
            return Err(ValidationError::rejected(format!(
                "Age must be between {} and {}",
                Self::MIN_AGE,
                Self::MAX_AGE
            )));
        }

        Ok(())
    }
}
