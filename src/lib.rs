//! # FitPlan
//!
//! Personalized meal and workout planning dashboard served over HTTP.
//!
//! A remote CSV of meal templates is fetched and reshaped into a
//! goal -> meal type -> meal name catalog, a static library of workout
//! routines is fixed at process start, and each session accumulates the
//! distinct dates on which the user marked a workout complete. One POST
//! per interaction renders the whole dashboard: profile lines, banners,
//! meal plan, workout tasks, and the cumulative progress series.
//!
//! ## Modules
//!
//! - [`catalog`]: Remote meal catalog loader and grouping
//! - [`workouts`]: Static workout routine library
//! - [`progress`]: Per-session progress log and cumulative series
//! - [`session`]: Session store owning one progress log per session
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fitplan::api::{serve, ApiConfig, AppState};
//! use fitplan::catalog::{CatalogLoader, DEFAULT_CATALOG_URL};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = Arc::new(CatalogLoader::new(DEFAULT_CATALOG_URL, 10_000)?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(loader, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod progress;
pub mod session;
pub mod workouts;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use catalog::{
    CatalogError, CatalogLoader, CatalogRow, GoalMeals, LoadOutcome, MealCatalog, MealSlot,
};

pub use config::{CatalogConfig, Config, ConfigError, LoggingConfig, ServerConfig};

pub use progress::{ProgressLog, SeriesPoint};

pub use session::SessionStore;

pub use workouts::{RoutineCategory, WorkoutLibrary};
