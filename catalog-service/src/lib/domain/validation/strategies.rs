use std::sync::Arc;

use crate::domain::validation::errors::ValidationError;
use crate::domain::validation::models::FieldValue;
use crate::domain::validation::models::ValidationFieldKind;
use crate::domain::validation::ports::FieldValidationStrategy;

pub mod dvd;
pub mod genre;
pub mod user;

/// Every built-in field validation strategy.
pub fn default_strategies() -> Vec<Arc<dyn FieldValidationStrategy>> {
    vec![
        Arc::new(user::NicknameValidation),
        Arc::new(user::PasswordValidation),
        Arc::new(user::AgeValidation),
        Arc::new(genre::GenreNameValidation),
        Arc::new(dvd::DvdTitleValidation),
        Arc::new(dvd::DvdDirectorsValidation),
        Arc::new(dvd::DvdDescriptionValidation),
        Arc::new(dvd::DvdYearValidation),
        Arc::new(dvd::DvdDurationValidation),
        Arc::new(dvd::DvdCopiesValidation),
        Arc::new(dvd::DvdPriceValidation),
    ]
}

fn mismatch(
    field: ValidationFieldKind,
    expected: &'static str,
    value: &FieldValue,
) -> ValidationError {
    ValidationError::UnexpectedValueType {
        field,
        expected,
        actual: value.type_name(),
    }
}

pub(crate) fn expect_text<'a>(
    value: &'a FieldValue,
    field: ValidationFieldKind,
    required: &str,
) -> Result<&'a str, ValidationError> {
    match value {
        FieldValue::Text(text) => Ok(text.as_str()),
        FieldValue::Null => Err(ValidationError::rejected(required)),
        other => Err(mismatch(field, "text", other)),
    }
}

pub(crate) fn expect_text_list<'a>(
    value: &'a FieldValue,
    field: ValidationFieldKind,
    required: &str,
) -> Result<&'a [String], ValidationError> {
    match value {
        FieldValue::TextList(items) => Ok(items.as_slice()),
        FieldValue::Null => Err(ValidationError::rejected(required)),
        other => Err(mismatch(field, "text list", other)),
    }
}

pub(crate) fn expect_integer(
    value: &FieldValue,
    field: ValidationFieldKind,
    required: &str,
) -> Result<i64, ValidationError> {
    match value {
        FieldValue::Integer(number) => Ok(*number),
        FieldValue::Null => Err(ValidationError::rejected(required)),
        other => Err(mismatch(field, "integer", other)),
    }
}

/// Integers are accepted where a decimal is expected.
pub(crate) fn expect_decimal(
    value: &FieldValue,
    field: ValidationFieldKind,
    required: &str,
) -> Result<f64, ValidationError> {
    match value {
        FieldValue::Decimal(number) => Ok(*number),
        FieldValue::Integer(number) => Ok(*number as f64),
        FieldValue::Null => Err(ValidationError::rejected(required)),
        other => Err(mismatch(field, "decimal", other)),
    }
}

/// Length in characters rather than bytes.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_strategies_cover_every_kind_once() {
        let kinds: Vec<ValidationFieldKind> = default_strategies()
            .iter()
            .map(|s| s.supported_kind())
            .collect();
        let unique: HashSet<_> = kinds.iter().copied().collect();

        assert_eq!(kinds.len(), ValidationFieldKind::ALL.len());
        assert_eq!(unique.len(), ValidationFieldKind::ALL.len());
    }

    #[test]
    fn test_decimal_accepts_integer() {
        let value = FieldValue::Integer(3);
        assert_eq!(
            expect_decimal(&value, ValidationFieldKind::DvdPrice, "required"),
            Ok(3.0)
        );
    }

    #[test]
    fn test_null_reports_required_message() {
        let result = expect_text(
            &FieldValue::Null,
            ValidationFieldKind::DvdTitle,
            "Title is required",
        );
        assert_eq!(result, Err(ValidationError::rejected("Title is required")));
    }

    #[test]
    fn test_wrong_shape_is_a_type_mismatch() {
        let result = expect_integer(
            &FieldValue::from("1999"),
            ValidationFieldKind::DvdYear,
            "required",
        );
        assert_eq!(
            result,
            Err(ValidationError::UnexpectedValueType {
                field: ValidationFieldKind::DvdYear,
                expected: "integer",
                actual: "text",
            })
        );
    }
}
