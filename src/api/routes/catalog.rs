//! Catalog Route
//!
//! - GET /api/v1/catalog - Fetch and return the current meal catalog
//!
//! Every call re-fetches the remote CSV; there is no caching across
//! loads. A failed load answers 200 with an empty catalog and the
//! diagnostic warning, never a 5xx.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::CatalogResponse;
use crate::api::state::AppState;

/// GET /api/v1/catalog
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    let outcome = state.catalog.load().await;

    Json(CatalogResponse {
        catalog: outcome.catalog,
        warning: outcome.warning,
    })
}
