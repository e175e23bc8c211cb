//! Vehicle endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use tracing::debug;

use crate::dto::{ListQuery, VehicleResponse};
use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

/// List vehicles.
///
/// Returns every record in dataset order, or a window of them when
/// `limit`/`offset` are given. Empty while the dataset is loading.
#[utoipa::path(
    get,
    path = "/api/evs",
    params(ListQuery),
    responses(
        (status = 200, description = "Vehicle records", body = [VehicleResponse]),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
    ),
    tag = "vehicles"
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    let Query(params) = query?;
    let vehicles = params.window(state.cache.vehicles());
    debug!("Listing {} vehicles", vehicles.len());
    Ok(Json(vehicles.iter().map(VehicleResponse::from).collect()))
}

/// Get a vehicle by ID.
#[utoipa::path(
    get,
    path = "/api/evs/{id}",
    params(
        ("id" = u64, Path, description = "Sequential vehicle id")
    ),
    responses(
        (status = 200, description = "Vehicle found", body = VehicleResponse),
        (status = 400, description = "Id is not a number", body = ErrorResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
    ),
    tag = "vehicles"
)]
pub async fn get_vehicle_by_id(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<VehicleResponse>, ApiError> {
    let Path(id) = path?;
    let vehicle = state
        .cache
        .find(id)
        .ok_or_else(|| ApiError::NotFound(format!("EV not found: {}", id)))?;

    Ok(Json(VehicleResponse::from(vehicle)))
}
