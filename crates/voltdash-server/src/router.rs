//! Router configuration and route composition.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::{Router, routing::get};
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::handlers::{health, stats, vehicles};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Per-IP rate limiting needs the peer address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()` unless
/// `rate_limit_rps` is 0.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/stats", get(stats::get_stats))
        .route("/evs", get(vehicles::list_vehicles))
        .route("/evs/:id", get(vehicles::get_vehicle_by_id));

    let cors_layer = build_cors_layer(&config.cors_origins);

    let router = Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware layers (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    with_rate_limit(router, config.rate_limit_rps, config.rate_limit_burst).with_state(state)
}

/// Adds the per-IP rate limiter unless `rps` is 0.
fn with_rate_limit(router: Router<AppState>, rps: u32, burst: u32) -> Router<AppState> {
    if rps == 0 {
        return router;
    }

    // One token is replenished every 1000/rps milliseconds.
    let period_ms = (1000 / u64::from(rps)).max(1);
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(period_ms)
        .burst_size(burst)
        .finish();

    match governor_config {
        Some(config) => router.layer(GovernorLayer {
            config: Arc::new(config),
        }),
        None => {
            warn!(
                "Invalid rate limit configuration (rps={}, burst={}); rate limiting disabled",
                rps, burst
            );
            router
        }
    }
}

/// Build CORS layer from configuration.
///
/// If `origins` is "*", allows any origin (for development).
/// Otherwise, parses comma-separated origins.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600));

    if origins == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let allowed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(allowed)
    }
}
