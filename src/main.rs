//! FitPlan Server
//!
//! Single entry point: starts the dashboard API server.
//!
//! # Configuration
//!
//! Loaded from `~/.config/fitplan/config.toml` or `./fitplan.toml`,
//! with environment variable overrides:
//! - `FITPLAN_HOST`: Host to bind to (default: 0.0.0.0)
//! - `FITPLAN_PORT`: Port to listen on (default: 8090)
//! - `FITPLAN_CATALOG_URL`: Meal catalog CSV URL
//! - `FITPLAN_LOG_LEVEL`: Log level (default: info)
//! - `FITPLAN_LOG_FORMAT`: "pretty" or "json" (default: pretty)
//! - `RUST_LOG`: Full tracing filter, takes precedence over the above

use fitplan::api::{serve, AppState};
use fitplan::catalog::CatalogLoader;
use fitplan::config::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting FitPlan server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Meal catalog source: {}", config.catalog.url);

    let loader = Arc::new(CatalogLoader::new(
        config.catalog.url.clone(),
        config.catalog.fetch_timeout_ms,
    )?);

    let api_config = config.server.to_api_config();
    let state = AppState::new(loader, api_config.clone());

    serve(state, &api_config).await?;

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("fitplan={},tower_http=info", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
