use crate::domain::billing::errors::BillingError;
use crate::domain::billing::models::BillDocument;
use crate::domain::billing::models::BillKind;
use crate::domain::billing::models::Rental;
use crate::domain::registry::KeyedStrategy;

/// Lays out the document for one bill kind.
pub trait DocumentStrategy: KeyedStrategy<Kind = BillKind> {
    /// Compose the bill for a settled rental.
    ///
    /// # Arguments
    /// * `rental` - Rental with its settlement transaction
    ///
    /// # Returns
    /// Renderer-neutral document
    fn compose(&self, rental: &Rental) -> BillDocument;
}

/// Turns a composed bill into bytes of a concrete format.
pub trait DocumentRenderer: Send + Sync + 'static {
    /// MIME type of the rendered output.
    fn content_type(&self) -> &str;

    /// File extension without the leading dot.
    fn extension(&self) -> &str;

    /// Render `document`.
    ///
    /// # Errors
    /// * `RenderingFailed` - The document could not be produced
    fn render(&self, document: &BillDocument) -> Result<Vec<u8>, BillingError>;
}
