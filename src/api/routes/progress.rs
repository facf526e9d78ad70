//! Progress Routes
//!
//! - POST /api/v1/progress - Record a workout completion for a session
//! - GET /api/v1/progress/:session_id - Cumulative series for a session
//!
//! The dashboard render records completions itself; these endpoints
//! exist for clients that drive the progress chart directly. Unknown
//! sessions are a 404 here, unlike the render pass which creates
//! sessions on demand.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::{ProgressSeriesResponse, RecordProgressRequest, RecordProgressResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/v1/progress
pub async fn record_progress(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecordProgressRequest>,
) -> ApiResult<Json<RecordProgressResponse>> {
    let date = req.date.unwrap_or_else(|| Utc::now().date_naive());

    let recorded = state
        .sessions
        .record_completion(req.session_id, date, req.completed)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Session '{}' not found", req.session_id)))?;

    let total_days = state
        .sessions
        .completed_days(req.session_id)
        .await
        .unwrap_or(0);

    Ok(Json(RecordProgressResponse {
        session_id: req.session_id,
        recorded,
        total_days,
    }))
}

/// GET /api/v1/progress/:session_id
pub async fn get_progress_series(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<ProgressSeriesResponse>> {
    let series = state
        .sessions
        .series(session_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Session '{}' not found", session_id)))?;

    Ok(Json(ProgressSeriesResponse {
        session_id,
        no_data: series.is_empty(),
        series,
    }))
}
