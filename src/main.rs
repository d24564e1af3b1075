use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use docsage_core::{
    config::{registry_timeout_from_env_value, registry_url_from_env_value},
    CoreConfig, LookupService,
};

/// Main entry point for the DocSage lookup proxy
///
/// Serves the REST lookup endpoint, health check and Swagger UI on port 3000 (configurable via
/// `DOCSAGE_REST_ADDR`). All configuration is resolved here, once, before the listener is bound.
///
/// # Environment Variables
/// - `DOCSAGE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `DOCSAGE_REGISTRY_URL`: registry search endpoint (default: the PMC public endpoint)
/// - `DOCSAGE_REGISTRY_TIMEOUT_SECS`: optional upstream timeout in whole seconds
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the registry configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docsage=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("DOCSAGE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let registry_url = registry_url_from_env_value(std::env::var("DOCSAGE_REGISTRY_URL").ok());
    let registry_timeout =
        registry_timeout_from_env_value(std::env::var("DOCSAGE_REGISTRY_TIMEOUT_SECS").ok())?;
    let cfg = CoreConfig::new(registry_url, registry_timeout)?;

    let lookup_service = LookupService::from_config(&cfg)?;
    tracing::info!(
        "++ Registry endpoint {} (timeout: {:?})",
        cfg.registry_url(),
        cfg.registry_timeout()
    );

    let app = api_rest::router(AppState::new(lookup_service));

    tracing::info!("++ Starting DocSage REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
