//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{
    CafvCountDto, HealthResponse, ListQuery, MakeCountDto, RangeBucketDto, ServiceStatus,
    StatsResponse, UtilityCountDto, VehicleResponse, YearCountDto,
};
use crate::error::ErrorResponse;
use crate::handlers::{health, stats, vehicles};

/// OpenAPI documentation for the Voltdash API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Voltdash API",
        version = "1.0.0",
        description = "Read-only analytics over electric vehicle registrations.

The server downloads the public Electric Vehicle Population CSV once at
startup and answers every request from memory.

## Quick Start

1. Check dataset status: `GET /api/health`
2. List vehicles: `GET /api/evs?limit=100`
3. View statistics: `GET /api/stats`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        health::health_check,
        stats::get_stats,
        vehicles::list_vehicles,
        vehicles::get_vehicle_by_id,
    ),
    components(
        schemas(
            // Request types
            ListQuery,
            // Response types
            HealthResponse,
            ServiceStatus,
            VehicleResponse,
            StatsResponse,
            CafvCountDto,
            UtilityCountDto,
            RangeBucketDto,
            YearCountDto,
            MakeCountDto,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Server and dataset health"),
        (name = "vehicles", description = "Vehicle registration records"),
        (name = "stats", description = "Aggregate statistics"),
    )
)]
pub struct ApiDoc;
