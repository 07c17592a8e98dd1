use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::dvd::models::Dvd;
use crate::domain::dvd::models::DvdFilter;
use crate::domain::registry::RegistryError;

pub mod genre;
pub mod search_phrase;

pub use genre::GenreFilter;
pub use search_phrase::SearchPhraseFilter;

/// One composable step of a DVD listing filter.
pub trait FilterStrategy: Send + Sync {
    /// Stable name, unique within a registry.
    fn name(&self) -> &'static str;

    /// Whether the criteria carry anything this strategy filters on.
    fn applies_to(&self, criteria: &DvdFilter) -> bool;

    /// Narrow `dvds` according to `criteria`, preserving relative order.
    fn execute(&self, dvds: Vec<Dvd>, criteria: &DvdFilter) -> Vec<Dvd>;
}

/// First phase of filter registry construction.
///
/// Registration order is the application order.
#[derive(Default)]
pub struct FilterRegistryBuilder {
    strategies: Vec<Arc<dyn FilterStrategy>>,
}

impl FilterRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, strategy: Arc<dyn FilterStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Finalize the chain.
    ///
    /// # Errors
    /// * `DuplicateStrategyRegistration` - Two strategies share a name
    pub fn build(self) -> Result<FilterRegistry, RegistryError> {
        let mut names = HashSet::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            if !names.insert(strategy.name()) {
                return Err(RegistryError::DuplicateStrategyRegistration(
                    strategy.name().to_string(),
                ));
            }
        }

        tracing::debug!(
            strategies = ?self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            "Filter registry built"
        );

        Ok(FilterRegistry {
            strategies: self.strategies,
        })
    }
}

/// Ordered, immutable chain of DVD filter strategies.
///
/// Each applicable strategy sees the output of the ones declared before it,
/// so declaration order acts as priority whenever strategies do not commute.
pub struct FilterRegistry {
    strategies: Vec<Arc<dyn FilterStrategy>>,
}

impl FilterRegistry {
    pub fn builder() -> FilterRegistryBuilder {
        FilterRegistryBuilder::new()
    }

    /// Run every applicable strategy over `dvds` in declaration order.
    ///
    /// Strategies that do not apply are skipped; when none applies the
    /// input is returned unchanged.
    pub fn apply(&self, dvds: Vec<Dvd>, criteria: &DvdFilter) -> Vec<Dvd> {
        self.strategies
            .iter()
            .filter(|strategy| strategy.applies_to(criteria))
            .fold(dvds, |working, strategy| {
                let before = working.len();
                let filtered = strategy.execute(working, criteria);
                tracing::trace!(
                    strategy = strategy.name(),
                    before,
                    after = filtered.len(),
                    "Filter strategy applied"
                );
                filtered
            })
    }

    /// Strategy names in application order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
