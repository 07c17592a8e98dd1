use std::sync::Arc;

use crate::config::MediaConfig;
use crate::domain::billing;
use crate::domain::billing::models::BillKind;
use crate::domain::billing::service::BillingService;
use crate::domain::dvd::filter::FilterRegistry;
use crate::domain::dvd::filter::FilterStrategy;
use crate::domain::dvd::filter::GenreFilter;
use crate::domain::dvd::filter::SearchPhraseFilter;
use crate::domain::registry::RegistryError;
use crate::domain::registry::StrategyRegistry;
use crate::domain::resource::errors::ResourceError;
use crate::domain::resource::service::ResourceDispatcher;
use crate::domain::validation::service::FieldValidator;
use crate::inbound::http::router::MediaResources;
use crate::outbound::media::FilesystemAvatarHandler;
use crate::outbound::media::FilesystemPosterHandler;
use crate::outbound::rendering::PlainTextRenderer;

/// Bill kinds the service must be able to produce.
pub const REQUIRED_BILL_KINDS: [BillKind; 2] = [BillKind::Invoice, BillKind::Receipt];

/// DVD filters in application order.
pub fn filter_strategies() -> Vec<Arc<dyn FilterStrategy>> {
    vec![Arc::new(SearchPhraseFilter), Arc::new(GenreFilter)]
}

/// Every strategy registry the service runs with.
pub struct Registries {
    pub filters: FilterRegistry,
    pub validator: FieldValidator,
    pub billing: BillingService<PlainTextRenderer>,
}

impl Registries {
    /// Build and check all registries.
    ///
    /// # Errors
    /// * `DuplicateStrategyRegistration` - Two strategies claim one kind or name
    /// * `MissingStrategy` - A required kind has no strategy
    pub fn build() -> Result<Self, RegistryError> {
        let filters = filter_strategies()
            .into_iter()
            .fold(FilterRegistry::builder(), |builder, strategy| {
                builder.register(strategy)
            })
            .build()?;

        let validator = FieldValidator::with_default_strategies()?;

        let documents = StrategyRegistry::builder()
            .register_all(billing::strategies::default_strategies())
            .require(&REQUIRED_BILL_KINDS)
            .build()?;
        let billing = BillingService::new(documents, Arc::new(PlainTextRenderer::default()));

        tracing::info!(
            filters = ?filters.strategy_names(),
            "Strategy registries built"
        );

        Ok(Self {
            filters,
            validator,
            billing,
        })
    }
}

/// Filesystem-backed image dispatch, creating media directories as needed.
///
/// # Errors
/// * `Storage` - A media directory could not be created
pub fn media_resources(config: &MediaConfig) -> Result<MediaResources, ResourceError> {
    let posters = FilesystemPosterHandler::from_config(config)?;
    let avatars = FilesystemAvatarHandler::from_config(config)?;

    Ok(ResourceDispatcher::new(Arc::new(posters), Arc::new(avatars)))
}
