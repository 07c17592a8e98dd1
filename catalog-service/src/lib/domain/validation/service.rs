use std::sync::Arc;

use crate::domain::registry::RegistryError;
use crate::domain::registry::StrategyRegistry;
use crate::domain::validation::errors::ValidationError;
use crate::domain::validation::models::FieldValue;
use crate::domain::validation::models::ValidationFieldKind;
use crate::domain::validation::ports::FieldValidationStrategy;
use crate::domain::validation::strategies::default_strategies;

/// Routes field values to the validation strategy of their kind.
pub struct FieldValidator {
    registry: StrategyRegistry<dyn FieldValidationStrategy>,
}

impl FieldValidator {
    /// Wrap an already built strategy registry.
    pub fn new(registry: StrategyRegistry<dyn FieldValidationStrategy>) -> Self {
        Self { registry }
    }

    /// Validator over every built-in strategy, requiring all field kinds.
    ///
    /// # Errors
    /// * `DuplicateStrategyRegistration` - Two strategies claim one kind
    /// * `MissingStrategy` - A field kind has no strategy
    pub fn with_default_strategies() -> Result<Self, RegistryError> {
        Self::from_strategies(default_strategies())
    }

    /// Build a validator that must cover every field kind.
    pub fn from_strategies(
        strategies: impl IntoIterator<Item = Arc<dyn FieldValidationStrategy>>,
    ) -> Result<Self, RegistryError> {
        let registry = StrategyRegistry::builder()
            .register_all(strategies)
            .require(&ValidationFieldKind::ALL)
            .build()?;

        Ok(Self::new(registry))
    }

    /// Validate `value` as a field of `kind`.
    ///
    /// # Errors
    /// * `Rejected` - The value breaks one of the field rules
    /// * `UnexpectedValueType` - The value has the wrong shape for the field
    /// * `Registry` - No strategy is registered for `kind`
    pub fn validate(
        &self,
        kind: ValidationFieldKind,
        value: &FieldValue,
    ) -> Result<(), ValidationError> {
        tracing::debug!(field = %kind, value_type = value.type_name(), "Validating field");

        let strategy = self.registry.lookup(kind)?;

        match strategy.validate(value) {
            Ok(()) => {
                tracing::debug!(field = %kind, "Field validation passed");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(field = %kind, "Field validation failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn supports(&self, kind: ValidationFieldKind) -> bool {
        self.registry.contains(kind)
    }
}
