//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.
//!
//! Note the split between shared read-only collaborators (catalog loader,
//! workout library) and per-session mutable state, which lives behind the
//! [`SessionStore`] and nowhere else.

use std::sync::Arc;
use std::time::Instant;

use crate::catalog::CatalogLoader;
use crate::session::SessionStore;
use crate::workouts::WorkoutLibrary;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loader for the remote meal catalog (re-fetches on every render)
    pub catalog: Arc<CatalogLoader>,
    /// Static workout routine library, fixed at process start
    pub workouts: Arc<WorkoutLibrary>,
    /// Per-session progress logs
    pub sessions: Arc<SessionStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(catalog: Arc<CatalogLoader>, config: ApiConfig) -> Self {
        Self {
            catalog,
            workouts: Arc::new(WorkoutLibrary::builtin()),
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            request_timeout_ms: 30_000,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
