use super::char_len;
use super::expect_text;
use super::is_blank;
use crate::domain::registry::KeyedStrategy;
use crate::domain::validation::errors::ValidationError;
use crate::domain::validation::models::FieldValue;
use crate::domain::validation::models::ValidationFieldKind;
use crate::domain::validation::ports::FieldValidationStrategy;

/// Genre name shape: required, not blank, 5-75 characters.
///
/// Uniqueness against stored genres is checked by the persistence layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreNameValidation;

impl GenreNameValidation {
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 75;
}

impl KeyedStrategy for GenreNameValidation {
    type Kind = ValidationFieldKind;

    fn supported_kind(&self) -> ValidationFieldKind {
        ValidationFieldKind::GenreName
    }
}

impl FieldValidationStrategy for GenreNameValidation {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let name = expect_text(value, ValidationFieldKind::GenreName, "Genre name is required")?;

        if is_blank(name) {
            return Err(ValidationError::rejected("Genre name cannot be blank"));
        }
        let length = char_len(name);
        if length < Self::MIN_LENGTH {
            return Err(ValidationError::rejected(format!(
                "Genre name must be at least {} characters long",
                Self::MIN_LENGTH
            )));
        }
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::rejected(format!(
                "Genre name cannot exceed {} characters",
                Self::MAX_LENGTH
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_name_rules() {
        let strategy = GenreNameValidation;

        assert!(strategy.validate(&"Horror".into()).is_ok());
        assert_eq!(
            strategy.validate(&FieldValue::Null),
            Err(ValidationError::rejected("Genre name is required"))
        );
        assert_eq!(
            strategy.validate(&"     ".into()),
            Err(ValidationError::rejected("Genre name cannot be blank"))
        );
        assert!(strategy.validate(&"War".into()).is_err());
        assert!(strategy.validate(&"g".repeat(76).into()).is_err());
    }
}
