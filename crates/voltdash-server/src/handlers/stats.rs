//! Statistics endpoint.

use axum::{Json, extract::State};

use voltdash_core::compute_stats;

use crate::dto::StatsResponse;
use crate::state::AppState;

/// Get vehicle statistics.
///
/// Recomputed from the full dataset on every request.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Aggregate vehicle statistics", body = StatsResponse),
    ),
    tag = "stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(compute_stats(state.cache.vehicles())))
}
