use std::sync::Arc;

use crate::domain::billing::ports::DocumentStrategy;

pub mod invoice;
pub mod receipt;

pub use invoice::InvoiceStrategy;
pub use receipt::ReceiptStrategy;

/// Seller details printed on every bill.
pub(crate) const SELLER_NAME: &str = "CineRent Sp. z o.o.";
pub(crate) const SELLER_ADDRESS: [&str; 3] = [
    "ul. Choroszczanska 10",
    "15-950 Bialystok",
    "NIP: 123-456-78-90",
];

pub(crate) const RENTAL_SERVICE: &str = "DVD rental service";
pub(crate) const LATE_FEE: &str = "Late return fee";

/// Strategies the service ships with.
pub fn default_strategies() -> Vec<Arc<dyn DocumentStrategy>> {
    vec![Arc::new(InvoiceStrategy), Arc::new(ReceiptStrategy)]
}
