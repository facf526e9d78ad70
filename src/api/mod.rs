//! FitPlan REST API
//!
//! HTTP API layer for FitPlan, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `POST /api/v1/dashboard` - One full render pass for a session
//!
//! ## Catalog
//! - `GET /api/v1/catalog` - Fetch the current meal catalog
//!
//! ## Workouts
//! - `GET /api/v1/workouts` - List the workout routine library
//!
//! ## Progress
//! - `POST /api/v1/progress` - Record a workout completion
//! - `GET /api/v1/progress/:session_id` - Cumulative series for a session
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dashboard render pass
        .route("/dashboard", post(routes::dashboard::render_dashboard))
        // Catalog routes
        .route("/catalog", get(routes::catalog::get_catalog))
        // Workout routes
        .route("/workouts", get(routes::workouts::list_workouts))
        // Progress routes
        .route("/progress", post(routes::progress::record_progress))
        .route("/progress/:session_id", get(routes::progress::get_progress_series));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("FitPlan API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("FitPlan API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
