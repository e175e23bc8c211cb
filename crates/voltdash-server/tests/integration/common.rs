//! Shared fixtures for router tests.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use voltdash_core::{Dataset, DatasetCache, parse_vehicles};
use voltdash_server::config::DEFAULT_CORS_ORIGINS;
use voltdash_server::{AppState, ServerConfig, create_router};

pub const SOURCE: &str = "mock://vehicles.csv";

pub const SAMPLE_CSV: &str = "\
VIN (1-10),County,City,State,Postal Code,Model Year,Make,Model,Electric Vehicle Type,Clean Alternative Fuel Vehicle (CAFV) Eligibility,Electric Range,Base MSRP,Legislative District,DOL Vehicle ID,Vehicle Location,Electric Utility,2020 Census Tract
5YJYGDEE1L,King,Seattle,WA,98122,2020,TESLA,MODEL Y,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,291,0,37,125701579,POINT (-122.30839 47.610365),CITY OF SEATTLE - (WA)|CITY OF TACOMA - (WA),53033007800
1N4AZ0CP8D,Yakima,Yakima,WA,98902,2013,NISSAN,LEAF,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,75,0,14,4844575,POINT (-120.524012 46.5973939),PACIFICORP,53077001602
KNDCC3LG6L,Kitsap,Bremerton,WA,98310,2020,KIA,NIRO,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,239,0,23,128634390,POINT (-122.6368884 47.5815164),PUGET SOUND ENERGY INC,53035080800
1G1RB6S58H,Thurston,Olympia,WA,98513,2017,CHEVROLET,VOLT,Plug-in Hybrid Electric Vehicle (PHEV),Clean Alternative Fuel Vehicle Eligible,53,0,2,474183811,POINT (-122.75605 46.98786),PUGET SOUND ENERGY INC,53067011600
WBY73AW01P,Snohomish,Bothell,WA,98012,,BMW,I4,Battery Electric Vehicle (BEV),Eligibility unknown as battery range has not been researched,0,0,1,236373024,,PUGET SOUND ENERGY INC,53061051938
";

/// Router config with rate limiting off; `oneshot` requests carry no peer address.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        host: "127.0.0.1".to_string(),
        dataset_url: None,
        dataset_path: None,
        cors_origins: DEFAULT_CORS_ORIGINS.to_string(),
        rate_limit_rps: 0,
        rate_limit_burst: 50,
    }
}

pub fn loaded_cache() -> DatasetCache {
    let vehicles = parse_vehicles(SAMPLE_CSV).expect("sample CSV parses");
    DatasetCache::with_dataset(Dataset::loaded(vehicles, SOURCE))
}

pub fn failed_cache() -> DatasetCache {
    DatasetCache::with_dataset(Dataset::failed(SOURCE, "Network error: Connection failed"))
}

pub fn router_with(cache: DatasetCache) -> Router {
    create_router(AppState::new(cache, SOURCE), &test_config())
}

/// Sends a GET request and returns the status and parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        // Non-JSON bodies surface as a plain string so shape assertions fail loudly.
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, body)
}
