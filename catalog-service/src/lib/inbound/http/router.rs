use std::sync::Arc;
use std::time::Duration;

use auth::ClaimsExtractor;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::bills::generate_bill;
use super::handlers::dvds::filter_dvds;
use super::handlers::resources::get_avatar;
use super::handlers::resources::get_poster;
use super::handlers::resources::upload_poster;
use super::handlers::session::get_session;
use super::handlers::validation::validate_field;
use super::middleware::authenticate as auth_middleware;
use crate::bootstrap::Registries;
use crate::domain::billing::service::BillingService;
use crate::domain::dvd::filter::FilterRegistry;
use crate::domain::resource::service::ResourceDispatcher;
use crate::domain::validation::service::FieldValidator;
use crate::outbound::media::FilesystemAvatarHandler;
use crate::outbound::media::FilesystemPosterHandler;
use crate::outbound::rendering::PlainTextRenderer;

/// Image dispatch over the filesystem handlers.
pub type MediaResources = ResourceDispatcher<FilesystemPosterHandler, FilesystemAvatarHandler>;

#[derive(Clone)]
pub struct AppState {
    pub filters: Arc<FilterRegistry>,
    pub validator: Arc<FieldValidator>,
    pub billing: Arc<BillingService<PlainTextRenderer>>,
    pub resources: Arc<MediaResources>,
    pub claims_extractor: ClaimsExtractor,
    pub jwt_secret: Arc<str>,
}

/// Base64 inflates payloads by a third; leave room for the JSON envelope.
fn upload_body_limit(max_image_size: usize) -> usize {
    max_image_size / 3 * 4 + 4 * 1024
}

pub fn create_router(
    registries: Registries,
    resources: Arc<MediaResources>,
    jwt_secret: &str,
    max_image_size: usize,
) -> Router {
    let state = AppState {
        filters: Arc::new(registries.filters),
        validator: Arc::new(registries.validator),
        billing: Arc::new(registries.billing),
        resources,
        claims_extractor: ClaimsExtractor::new(),
        jwt_secret: Arc::from(jwt_secret),
    };

    let public_routes = Router::new()
        .route("/api/resources/posters/:filename", get(get_poster))
        .route("/api/resources/avatars/:filename", get(get_avatar));

    let protected_routes = Router::new()
        .route("/api/auth/session", get(get_session))
        .route(
            "/api/resources/posters",
            post(upload_poster).layer(DefaultBodyLimit::max(upload_body_limit(max_image_size))),
        )
        .route("/api/dvds/filter", post(filter_dvds))
        .route("/api/validation/:field", post(validate_field))
        .route("/api/bills/:kind", post(generate_bill))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_limit_covers_base64_overhead() {
        let max = 5 * 1024 * 1024;
        let encoded = (max + 2) / 3 * 4;
        assert!(upload_body_limit(max) > encoded);
    }
}
