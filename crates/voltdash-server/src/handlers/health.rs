//! Health check endpoint.

use axum::{Json, extract::State};

use voltdash_core::LoadStatus;

use crate::dto::{HealthResponse, ServiceStatus};
use crate::state::AppState;

/// Health check endpoint.
///
/// Returns the server version and whether the dataset has loaded. The
/// endpoint always answers 200; a failed load is reported as `degraded`.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server and dataset status", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, healthy, message) = match state.cache.status() {
        LoadStatus::Loading => ("loading", false, Some("Dataset is loading".to_string())),
        LoadStatus::Ready { .. } => ("healthy", true, None),
        LoadStatus::Failed { message } => ("degraded", false, Some(message)),
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: ServiceStatus {
            healthy,
            message,
            records: state.cache.vehicles().len(),
            source: state.source.clone(),
            loaded_at: state.cache.get().map(|d| d.loaded_at()),
        },
    })
}
