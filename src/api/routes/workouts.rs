//! Workout Routes
//!
//! - GET /api/v1/workouts - List the static workout routine library

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::WorkoutsResponse;
use crate::api::state::AppState;

/// GET /api/v1/workouts
pub async fn list_workouts(State(state): State<Arc<AppState>>) -> Json<WorkoutsResponse> {
    Json(WorkoutsResponse {
        categories: state.workouts.categories().to_vec(),
    })
}
