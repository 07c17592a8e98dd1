use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::errors::ErrorKind;

/// A strategy that declares the single discriminator value it serves.
pub trait KeyedStrategy: Send + Sync {
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Discriminator this strategy is registered under.
    fn supported_kind(&self) -> Self::Kind;
}

/// Errors raised while building or querying a strategy registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate strategy registration for: {0}")]
    DuplicateStrategyRegistration(String),

    #[error("No strategy registered for required kind: {0}")]
    MissingStrategy(String),

    #[error("No strategy found for kind: {0}")]
    StrategyNotFound(String),
}

impl RegistryError {
    /// Every registry failure is a wiring defect: the discriminator sets are
    /// closed, so a miss means the registration list is wrong.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ConfigurationDefect
    }
}

/// First phase of registry construction: collects strategies and the kinds
/// that must be covered.
pub struct StrategyRegistryBuilder<S: ?Sized + KeyedStrategy> {
    strategies: Vec<Arc<S>>,
    required: Vec<S::Kind>,
}

impl<S: ?Sized + KeyedStrategy> StrategyRegistryBuilder<S> {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            required: Vec::new(),
        }
    }

    pub fn register(mut self, strategy: Arc<S>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn register_all(mut self, strategies: impl IntoIterator<Item = Arc<S>>) -> Self {
        self.strategies.extend(strategies);
        self
    }

    /// Kinds that must each resolve to a strategy once built.
    pub fn require(mut self, kinds: &[S::Kind]) -> Self {
        self.required.extend_from_slice(kinds);
        self
    }

    /// Finalize the registry.
    ///
    /// # Errors
    /// * `DuplicateStrategyRegistration` - Two strategies declare the same kind
    /// * `MissingStrategy` - A required kind has no strategy
    pub fn build(self) -> Result<StrategyRegistry<S>, RegistryError> {
        let mut strategies = HashMap::with_capacity(self.strategies.len());

        for strategy in self.strategies {
            let kind = strategy.supported_kind();
            match strategies.entry(kind) {
                Entry::Occupied(_) => {
                    return Err(RegistryError::DuplicateStrategyRegistration(format!(
                        "{:?}",
                        kind
                    )))
                }
                Entry::Vacant(slot) => {
                    slot.insert(strategy);
                }
            }
        }

        if let Some(missing) = self
            .required
            .iter()
            .find(|kind| !strategies.contains_key(*kind))
        {
            return Err(RegistryError::MissingStrategy(format!("{:?}", missing)));
        }

        tracing::debug!(strategies = strategies.len(), "Strategy registry built");

        Ok(StrategyRegistry { strategies })
    }
}

impl<S: ?Sized + KeyedStrategy> Default for StrategyRegistryBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from discriminator to strategy.
///
/// Built once at startup and only read afterwards.
pub struct StrategyRegistry<S: ?Sized + KeyedStrategy> {
    strategies: HashMap<S::Kind, Arc<S>>,
}

impl<S: ?Sized + KeyedStrategy> StrategyRegistry<S> {
    pub fn builder() -> StrategyRegistryBuilder<S> {
        StrategyRegistryBuilder::new()
    }

    /// Resolve the strategy registered for `kind`.
    ///
    /// # Errors
    /// * `StrategyNotFound` - No strategy declares `kind`
    pub fn lookup(&self, kind: S::Kind) -> Result<Arc<S>, RegistryError> {
        self.strategies
            .get(&kind)
            .cloned()
            .ok_or_else(|| RegistryError::StrategyNotFound(format!("{:?}", kind)))
    }

    pub fn contains(&self, kind: S::Kind) -> bool {
        self.strategies.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = S::Kind> + '_ {
        self.strategies.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
