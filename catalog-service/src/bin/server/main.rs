use std::sync::Arc;

use catalog_service::bootstrap;
use catalog_service::bootstrap::Registries;
use catalog_service::config::Config;
use catalog_service::config::RECOMMENDED_SECRET_BYTES;
use catalog_service::inbound::http::router::create_router;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        poster_dir = %config.media.poster.dir.display(),
        avatar_dir = %config.media.avatar.dir.display(),
        poster_max_size = config.media.poster.max_size,
        "Configuration loaded"
    );

    if config.jwt.is_secret_weak() {
        tracing::warn!(
            length = config.jwt.secret.len(),
            recommended = RECOMMENDED_SECRET_BYTES,
            "JWT secret is shorter than recommended"
        );
    }

    let registries = Registries::build()?;
    let resources = Arc::new(bootstrap::media_resources(&config.media)?);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        registries,
        resources,
        &config.jwt.secret,
        config.media.poster.max_size,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
