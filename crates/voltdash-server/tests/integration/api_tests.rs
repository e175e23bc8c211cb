use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use voltdash_core::DatasetCache;

use super::common::{failed_cache, get_json, loaded_cache, router_with};

#[tokio::test]
async fn test_list_returns_all_vehicles_in_order() {
    let (status, body) = get_json(router_with(loaded_cache()), "/api/evs").await;

    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 5);
    for (i, item) in list.iter().enumerate() {
        assert_eq!(item["id"], (i + 1) as u64);
    }
    assert_eq!(list[0]["make"], "TESLA");
    assert_eq!(list[0]["model"], "MODEL Y");
    assert_eq!(list[0]["year"], 2020);
    assert_eq!(list[0]["location"], "POINT (-122.30839 47.610365)");
    assert_eq!(list[4]["year"], 0);
    assert!(list[4].get("location").is_none());
}

#[tokio::test]
async fn test_list_supports_limit_and_offset() {
    let (status, body) = get_json(router_with(loaded_cache()), "/api/evs?limit=2&offset=1").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn test_list_rejects_invalid_limit() {
    let response = router_with(loaded_cache())
        .oneshot(
            Request::builder()
                .uri("/api/evs?limit=lots")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let (status, body) = get_json(router_with(loaded_cache()), "/api/evs?limit=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_get_vehicle_by_id() {
    let (status, body) = get_json(router_with(loaded_cache()), "/api/evs/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["model"], "LEAF");
    assert_eq!(body["range"], 75);
    assert_eq!(body["utility"], "PACIFICORP");
    assert_eq!(body["cafv"], "Clean Alternative Fuel Vehicle Eligible");
}

#[tokio::test]
async fn test_get_unknown_vehicle_is_404() {
    let (status, body) = get_json(router_with(loaded_cache()), "/api/evs/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "EV not found: 999");
}

#[tokio::test]
async fn test_get_vehicle_zero_is_404() {
    let (status, _) = get_json(router_with(loaded_cache()), "/api/evs/0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_vehicle_non_numeric_id_is_400() {
    let (status, body) = get_json(router_with(loaded_cache()), "/api/evs/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_stats() {
    let (status, body) = get_json(router_with(loaded_cache()), "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_vehicles"], 5);
    assert_eq!(body["cafv_count"], 5);
    assert_eq!(body["cafv_eligible_count"], 4);
    assert_eq!(body["unknown_year_count"], 1);

    let buckets: Vec<(String, u64)> = body["range_distribution"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| {
            (
                b["range"].as_str().unwrap().to_string(),
                b["value"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        buckets,
        vec![
            ("0-50".to_string(), 1),
            ("51-100".to_string(), 2),
            ("101-200".to_string(), 0),
            ("200+".to_string(), 2),
        ]
    );

    let years: Vec<i64> = body["yearly_adoption"]
        .as_array()
        .unwrap()
        .iter()
        .map(|y| y["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![2013, 2017, 2020]);

    let first_cafv = &body["cafv_breakdown"][0];
    assert_eq!(first_cafv["type"], "Clean Alternative Fuel Vehicle Eligible");
    assert_eq!(first_cafv["count"], 4);

    let utilities: Vec<&str> = body["utility_breakdown"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["utility"].as_str().unwrap())
        .collect();
    assert_eq!(
        utilities,
        vec![
            "CITY OF SEATTLE - (WA)|CITY OF TACOMA - (WA)",
            "PACIFICORP",
            "PUGET SOUND ENERGY INC",
        ]
    );
}

#[tokio::test]
async fn test_endpoints_while_loading() {
    let cache = DatasetCache::new();

    let (status, body) = get_json(router_with(cache.clone()), "/api/evs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));

    let (_, stats) = get_json(router_with(cache.clone()), "/api/stats").await;
    assert_eq!(stats["total_vehicles"], 0);
    assert_eq!(stats["range_distribution"].as_array().unwrap().len(), 4);

    let (_, health) = get_json(router_with(cache), "/api/health").await;
    assert_eq!(health["status"], "loading");
    assert_eq!(health["dataset"]["healthy"], false);
}

#[tokio::test]
async fn test_failed_load_serves_empty_dataset() {
    let (status, body) = get_json(router_with(failed_cache()), "/api/evs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));

    let (status, stats) = get_json(router_with(failed_cache()), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_vehicles"], 0);
    assert_eq!(stats["average_range"], 0.0);
    for bucket in stats["range_distribution"].as_array().unwrap() {
        assert_eq!(bucket["value"], 0);
    }

    let (status, _) = get_json(router_with(failed_cache()), "/api/evs/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(router_with(loaded_cache()), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["dataset"]["healthy"], true);
    assert_eq!(body["dataset"]["records"], 5);
    assert_eq!(body["dataset"]["source"], "mock://vehicles.csv");
    assert!(body["dataset"].get("message").is_none());

    let (_, body) = get_json(router_with(failed_cache()), "/api/health").await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["dataset"]["records"], 0);
    assert!(
        body["dataset"]["message"]
            .as_str()
            .unwrap()
            .contains("Connection failed")
    );
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) =
        get_json(router_with(loaded_cache()), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Voltdash API");
    assert!(body["paths"]["/api/evs/{id}"].is_object());
}

#[tokio::test]
async fn test_cors_allows_dashboard_origin() {
    let response = router_with(loaded_cache())
        .oneshot(
            Request::builder()
                .uri("/api/stats")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let response = router_with(loaded_cache())
        .oneshot(
            Request::builder()
                .uri("/api/stats")
                .header(header::ORIGIN, "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _) = get_json(router_with(loaded_cache()), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
