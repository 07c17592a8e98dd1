use thiserror::Error;

use crate::domain::billing::models::RentalId;
use crate::domain::errors::ErrorKind;
use crate::domain::registry::RegistryError;

/// Top-level error for bill generation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BillingError {
    #[error("Bill can only be generated for ended rentals (rental {0})")]
    RentalNotEnded(RentalId),

    #[error("Failed to render bill document: {0}")]
    RenderingFailed(String),

    #[error("Bill strategy unavailable: {0}")]
    Registry(#[from] RegistryError),
}

impl BillingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::RentalNotEnded(_) => ErrorKind::InvalidInput,
            BillingError::RenderingFailed(_) => ErrorKind::Internal,
            BillingError::Registry(e) => e.kind(),
        }
    }
}
