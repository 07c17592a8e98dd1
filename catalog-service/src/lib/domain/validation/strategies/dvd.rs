use chrono::Datelike;
use chrono::Utc;

use super::char_len;
use super::expect_decimal;
use super::expect_integer;
use super::expect_text;
use super::expect_text_list;
use super::is_blank;
use crate::domain::registry::KeyedStrategy;
use crate::domain::validation::errors::ValidationError;
use crate::domain::validation::models::FieldValue;
use crate::domain::validation::models::ValidationFieldKind;
use crate::domain::validation::ports::FieldValidationStrategy;

/// Checks a required, non-blank text against inclusive length bounds.
fn bounded_text(
    value: &FieldValue,
    field: ValidationFieldKind,
    label: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let text = expect_text(value, field, &format!("{} is required", label))?;

    if is_blank(text) {
        return Err(ValidationError::rejected(format!("{} cannot be blank", label)));
    }
    let length = char_len(text);
    if length < min {
        return Err(ValidationError::rejected(format!(
            "{} must be at least {} characters long",
            label, min
        )));
    }
    if length > max {
        return Err(ValidationError::rejected(format!(
            "{} cannot exceed {} characters",
            label, max
        )));
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DvdTitleValidation;

impl KeyedStrategy for DvdTitleValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::DvdTitle
    }
}

impl FieldValidationStrategy for DvdTitleValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        bounded_text(value, ValidationFieldKind::DvdTitle, "Title", 5, 75)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DvdDescriptionValidation;

impl KeyedStrategy for DvdDescriptionValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::DvdDescription
    }
}

impl FieldValidationStrategy for DvdDescriptionValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        bounded_text(
            value,
            ValidationFieldKind::DvdDescription,
            "Description",
            25,
            500,
        )
    }
}

/// At least one director, each name 10-50 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DvdDirectorsValidation;

impl KeyedStrategy for DvdDirectorsValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::DvdDirectors
    }
}

impl FieldValidationStrategy for DvdDirectorsValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let directors = expect_text_list(
            value,
            ValidationFieldKind::DvdDirectors,
            "Directors list is required",
        )?;

        if directors.is_empty() {
            return Err(ValidationError::rejected(
                "At least one director is required",
            ));
        }
        for director in directors {
            if is_blank(director) {
                return Err(ValidationError::rejected("Director name cannot be blank"));
            }
            let length = char_len(director);
            if length < 10 {
                return Err(ValidationError::rejected(
                    "Director name must be at least 10 characters long",
                ));
            }
            if length > 50 {
                return Err(ValidationError::rejected(
                    "Director name cannot exceed 50 characters",
                ));
            }
        }

        Ok(())
    }
}

/// Release year from 1000 up to the current year.
#[derive(Debug, Clone, Copy, Default)]
pub struct DvdYearValidation;

impl KeyedStrategy for DvdYearValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::DvdYear
    }
}

impl FieldValidationStrategy for DvdYearValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let year = expect_integer(value, ValidationFieldKind::DvdYear, "Release year is required")?;

        if year < 1000 {
            return Err(ValidationError::rejected(
                "Release year must be greater than 1000",
            ));
        }
        if year > i64::from(Utc::now().year()) {
            return Err(ValidationError::rejected(
                "Release year cannot be in the future",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DvdDurationValidation;

impl KeyedStrategy for DvdDurationValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::DvdDuration
    }
}

impl FieldValidationStrategy for DvdDurationValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let minutes = expect_integer(
            value,
            ValidationFieldKind::DvdDuration,
            "Duration is required",
        )?;

        if minutes <= 0 {
            return Err(ValidationError::rejected(
                "Duration must be greater than 0 minutes",
            ));
        }

        Ok(())
    }
}

/// Available copies between 0 and 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct DvdCopiesValidation;

impl KeyedStrategy for DvdCopiesValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::DvdCopies
    }
}

impl FieldValidationStrategy for DvdCopiesValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let copies = expect_integer(
            value,
            ValidationFieldKind::DvdCopies,
            "Number of available copies is required",
        )?;

        if copies < 0 {
            return Err(ValidationError::rejected(
                "Available copies cannot be negative",
            ));
        }
        if copies > 100 {
            return Err(ValidationError::rejected(
                "Available copies cannot exceed 100",
            ));
        }

        Ok(())
    }
}

/// Daily rental price strictly between 0 and 50.
#[derive(Debug, Clone, Copy, Default)]
pub struct DvdPriceValidation;

impl KeyedStrategy for DvdPriceValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::DvdPrice
    }
}

impl FieldValidationStrategy for DvdPriceValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let price = expect_decimal(
            value,
            ValidationFieldKind::DvdPrice,
            "Rental price is required",
        )?;

        if price <= 0.0 {
            return Err(ValidationError::rejected(
                "Rental price must be greater than 0",
            ));
        }
        if price >= 50.0 {
            return Err(ValidationError::rejected("Rental price must be less than 50"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_kinds() {
        assert_eq!(DvdTitleValidation.supported_kind(), ValidationFieldKind::DvdTitle);
        assert_eq!(
            DvdDescriptionValidation.supported_kind(),
            ValidationFieldKind::DvdDescription
        );
        assert_eq!(
            DvdDirectorsValidation.supported_kind(),
            ValidationFieldKind::DvdDirectors
        );
        assert_eq!(DvdYearValidation.supported_kind(), ValidationFieldKind::DvdYear);
        assert_eq!(
            DvdDurationValidation.supported_kind(),
            ValidationFieldKind::DvdDuration
        );
        assert_eq!(DvdCopiesValidation.supported_kind(), ValidationFieldKind::DvdCopies);
        assert_eq!(DvdPriceValidation.supported_kind(), ValidationFieldKind::DvdPrice);
    }

    #[test]
    fn test_title_bounds() {
        assert!(DvdTitleValidation.validate(&"Alien".into()).is_ok());
        assert_eq!(
            DvdTitleValidation.validate(&"Jaws".into()),
            Err(ValidationError::rejected(
                "Title must be at least 5 characters long"
            ))
        );
        assert_eq!(
            DvdTitleValidation.validate(&FieldValue::Null),
            Err(ValidationError::rejected("Title is required"))
        );
        assert!(DvdTitleValidation.validate(&"t".repeat(76).into()).is_err());
    }

    #[test]
    fn test_description_bounds() {
        assert!(DvdDescriptionValidation
            .validate(&"A crew in deep space answers a distress call".into())
            .is_ok());
        assert!(DvdDescriptionValidation.validate(&"Too short".into()).is_err());
    }

    #[test]
    fn test_directors() {
        let valid = FieldValue::from(vec!["Ridley Scott".to_string()]);
        assert!(DvdDirectorsValidation.validate(&valid).is_ok());

        assert_eq!(
            DvdDirectorsValidation.validate(&FieldValue::from(Vec::<String>::new())),
            Err(ValidationError::rejected("At least one director is required"))
        );

        let short = FieldValue::from(vec!["Ridley Scott".to_string(), "Nolan".to_string()]);
        assert_eq!(
            DvdDirectorsValidation.validate(&short),
            Err(ValidationError::rejected(
                "Director name must be at least 10 characters long"
            ))
        );
    }

    #[test]
    fn test_year() {
        assert!(DvdYearValidation.validate(&FieldValue::Integer(1979)).is_ok());
        assert!(DvdYearValidation.validate(&FieldValue::Integer(999)).is_err());

        let next_year = i64::from(Utc::now().year()) + 1;
        assert_eq!(
            DvdYearValidation.validate(&FieldValue::Integer(next_year)),
            Err(ValidationError::rejected(
                "Release year cannot be in the future"
            ))
        );
    }

    #[test]
    fn test_duration_and_copies() {
        assert!(DvdDurationValidation.validate(&FieldValue::Integer(117)).is_ok());
        assert!(DvdDurationValidation.validate(&FieldValue::Integer(0)).is_err());

        assert!(DvdCopiesValidation.validate(&FieldValue::Integer(0)).is_ok());
        assert!(DvdCopiesValidation.validate(&FieldValue::Integer(100)).is_ok());
        assert!(DvdCopiesValidation.validate(&FieldValue::Integer(-1)).is_err());
        assert!(DvdCopiesValidation.validate(&FieldValue::Integer(101)).is_err());
    }

    #[test]
    fn test_price() {
        assert!(DvdPriceValidation.validate(&FieldValue::Decimal(4.99)).is_ok());
        assert!(DvdPriceValidation.validate(&FieldValue::Integer(10)).is_ok());
        assert!(DvdPriceValidation.validate(&FieldValue::Decimal(0.0)).is_err());
        assert_eq!(
            DvdPriceValidation.validate(&FieldValue::Decimal(50.0)),
            Err(ValidationError::rejected("Rental price must be less than 50"))
        );
    }
}
