use std::sync::Arc;

use crate::domain::billing::errors::BillingError;
use crate::domain::billing::models::BillKind;
use crate::domain::billing::models::Rental;
use crate::domain::billing::models::RenderedBill;
use crate::domain::billing::ports::DocumentRenderer;
use crate::domain::billing::ports::DocumentStrategy;
use crate::domain::registry::RegistryError;
use crate::domain::registry::StrategyRegistry;

/// Produces bill documents for settled rentals.
///
/// Picks the document strategy for the requested kind and hands the composed
/// document to the configured renderer.
pub struct BillingService<R>
where
    R: DocumentRenderer,
{
    registry: StrategyRegistry<dyn DocumentStrategy>,
    renderer: Arc<R>,
}

impl<R> BillingService<R>
where
    R: DocumentRenderer,
{
    /// Create a billing service.
    ///
    /// # Arguments
    /// * `registry` - Document strategies keyed by bill kind
    /// * `renderer` - Output format implementation
    pub fn new(registry: StrategyRegistry<dyn DocumentStrategy>, renderer: Arc<R>) -> Self {
        Self { registry, renderer }
    }

    /// Resolve the strategy for `kind`.
    ///
    /// # Errors
    /// * `StrategyNotFound` - No strategy declares `kind`
    pub fn strategy(&self, kind: BillKind) -> Result<Arc<dyn DocumentStrategy>, RegistryError> {
        self.registry.lookup(kind)
    }

    pub fn supports(&self, kind: BillKind) -> bool {
        self.registry.contains(kind)
    }

    /// Generate the bill of `kind` for `rental`.
    ///
    /// # Returns
    /// Rendered bytes with file name and content type
    ///
    /// # Errors
    /// * `RentalNotEnded` - The rental is still active or awaiting return
    /// * `Registry` - No strategy is registered for `kind`
    /// * `RenderingFailed` - The renderer could not produce output
    pub fn generate(&self, kind: BillKind, rental: &Rental) -> Result<RenderedBill, BillingError> {
        if !rental.has_ended() {
            return Err(BillingError::RentalNotEnded(rental.id));
        }

        let strategy = self.registry.lookup(kind)?;
        let document = strategy.compose(rental);
        let bytes = self.renderer.render(&document)?;

        let filename = format!(
            "{}_{}.{}",
            kind.file_prefix(),
            rental.id,
            self.renderer.extension()
        );
        tracing::info!(
            rental_id = %rental.id,
            bill_kind = %kind,
            size = bytes.len(),
            "Generated bill {}",
            filename
        );

        Ok(RenderedBill {
            filename,
            content_type: self.renderer.content_type().to_string(),
            bytes,
        })
    }
}
