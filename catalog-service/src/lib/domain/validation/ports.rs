use crate::domain::registry::KeyedStrategy;
use crate::domain::validation::errors::ValidationError;
use crate::domain::validation::models::FieldValue;
use crate::domain::validation::models::ValidationFieldKind;

/// Validation rule set for one field kind.
pub trait FieldValidationStrategy: KeyedStrategy<Kind = ValidationFieldKind> {
    /// Check `value` against the rules of this field.
    ///
    /// # Errors
    /// * `Rejected` - A rule is broken (message describes which)
    /// * `UnexpectedValueType` - Value is not of the shape this field takes
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError>;
}
